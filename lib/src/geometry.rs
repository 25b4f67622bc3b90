use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::{eyre, Report};
use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Saturates at the edges of `i32` instead of wrapping.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Exact for any pair of coordinates, however far apart.
    pub fn manhattan_distance(self, other: Point) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Which way the y axis points on the wire.
///
/// The public Battlesnake API puts `(0, 0)` in the bottom left corner, so moving
/// up increases y. Some boards are rendered top-down instead; `YDown` covers those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    YUp,
    YDown,
}

impl Orientation {
    /// The y delta of a step up.
    fn up_dy(self) -> i32 {
        match self {
            Orientation::YUp => 1,
            Orientation::YDown => -1,
        }
    }

    /// The vertical direction whose step has the sign of `dy`. `dy` must be non-zero.
    pub fn vertical(self, dy: i32) -> Direction {
        if dy.signum() == self.up_dy() {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl FromStr for Orientation {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y-up" | "yup" | "up" => Ok(Orientation::YUp),
            "y-down" | "ydown" | "down" => Ok(Orientation::YDown),
            other => Err(eyre!("unknown orientation {other:?}, expected y-up or y-down")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order the safe set is reported.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self, orientation: Orientation) -> (i32, i32) {
        match self {
            Direction::Up => (0, orientation.up_dy()),
            Direction::Down => (0, -orientation.up_dy()),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The horizontal step that brings `from` closer to `to`, if they differ in x.
    pub fn horizontal_towards(from: Point, to: Point) -> Option<Direction> {
        match to.x.cmp(&from.x) {
            std::cmp::Ordering::Greater => Some(Direction::Right),
            std::cmp::Ordering::Less => Some(Direction::Left),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The vertical step that brings `from` closer to `to`, if they differ in y.
    pub fn vertical_towards(from: Point, to: Point, orientation: Orientation) -> Option<Direction> {
        match to.y.cmp(&from.y) {
            std::cmp::Ordering::Greater => Some(orientation.vertical(1)),
            std::cmp::Ordering::Less => Some(orientation.vertical(-1)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The step from `from` towards `to`, preferring the x axis.
    pub fn towards(from: Point, to: Point, orientation: Orientation) -> Option<Direction> {
        Self::horizontal_towards(from, to).or_else(|| Self::vertical_towards(from, to, orientation))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(eyre!("unknown direction {other:?}")),
        }
    }
}
