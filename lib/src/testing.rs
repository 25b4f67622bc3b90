//! Board builders shared by the unit tests.

use crate::geometry::Point;
use crate::tiebreak::TieBreak;
use crate::wire::{Board, GameState, Snake};

pub(crate) fn points(cells: &[(i32, i32)]) -> Vec<Point> {
    cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub(crate) fn snake(id: &str, body: &[(i32, i32)]) -> Snake {
    Snake {
        id: id.to_string(),
        name: id.to_string(),
        health: 100,
        body: points(body),
        length: body.len(),
    }
}

/// Builds an 11x11 game state around our own snake.
pub(crate) struct StateBuilder {
    state: GameState,
}

impl StateBuilder {
    pub(crate) fn new(you: &[(i32, i32)]) -> Self {
        let you = snake("me", you);
        Self {
            state: GameState {
                board: Board {
                    width: 11,
                    height: 11,
                    snakes: vec![you.clone()],
                    ..Default::default()
                },
                you,
                ..Default::default()
            },
        }
    }

    pub(crate) fn size(mut self, width: i32, height: i32) -> Self {
        self.state.board.width = width;
        self.state.board.height = height;
        self
    }

    pub(crate) fn opponent(mut self, id: &str, body: &[(i32, i32)]) -> Self {
        self.state.board.snakes.push(snake(id, body));
        self
    }

    pub(crate) fn food(mut self, cells: &[(i32, i32)]) -> Self {
        self.state.board.food = points(cells);
        self
    }

    pub(crate) fn hazards(mut self, cells: &[(i32, i32)]) -> Self {
        self.state.board.hazards = points(cells);
        self
    }

    pub(crate) fn turn(mut self, turn: u32) -> Self {
        self.state.turn = turn;
        self
    }

    pub(crate) fn build(self) -> GameState {
        self.state
    }
}

/// Always picks the same index, clamped to the slice.
pub(crate) struct FixedPick(pub usize);

impl TieBreak for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Fails the test if the selector asks for a random choice.
pub(crate) struct NoRandom;

impl TieBreak for NoRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        panic!("unexpected random pick among {len} options")
    }
}

