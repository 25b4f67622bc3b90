//! Request and response bodies of the Battlesnake HTTP API.
//!
//! Only the fields the move selector or the logs read are modelled; everything
//! else in a request is ignored while decoding.

use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, Point};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// The `game` object of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ruleset: Ruleset,
    #[serde(default)]
    pub timeout: u32,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: i32,
    /// Head first, tail last.
    pub body: Vec<Point>,
    #[serde(default)]
    pub length: usize,
}

impl Snake {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn neck(&self) -> Option<Point> {
        self.body.get(1).copied()
    }

    /// Body segments that will still be occupied next turn if the snake does not eat.
    pub fn segments_without_tail(&self) -> &[Point] {
        match self.body.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub food: Vec<Point>,
    #[serde(default)]
    pub hazards: Vec<Point>,
    #[serde(default)]
    pub snakes: Vec<Snake>,
}

/// A full move/start/end request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub game: GameInfo,
    #[serde(default)]
    pub turn: u32,
    pub board: Board,
    pub you: Snake,
}

impl GameState {
    /// Every snake on the board except our own.
    pub fn opponents(&self) -> impl Iterator<Item = &Snake> {
        self.board.snakes.iter().filter(|s| s.id != self.you.id)
    }
}

/// Body of the response to `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Body of the response to `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
}

impl From<Direction> for MoveResponse {
    fn from(direction: Direction) -> Self {
        Self {
            direction,
            shout: None,
        }
    }
}

/// Decodes a request body with simd-json.
pub fn decode_state(text: String) -> color_eyre::Result<GameState> {
    let mut bytes = text.into_bytes();
    simd_json::serde::from_slice(&mut bytes).wrap_err("request body is not a valid game state")
}
