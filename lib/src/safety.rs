use std::fmt;

use crate::geometry::Direction;
use crate::occupancy::is_occupied;
use crate::policy::SelectorConfig;
use crate::wire::GameState;

/// Which of the four directions are survivable this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeMoves {
    flags: [bool; 4],
}

impl SafeMoves {
    pub fn all() -> Self {
        Self { flags: [true; 4] }
    }

    pub fn none() -> Self {
        Self { flags: [false; 4] }
    }

    fn index(dir: Direction) -> usize {
        match dir {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn is_safe(&self, dir: Direction) -> bool {
        self.flags[Self::index(dir)]
    }

    pub fn mark_unsafe(&mut self, dir: Direction) {
        self.flags[Self::index(dir)] = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.contains(&true)
    }

    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&safe| safe).count()
    }

    /// Safe directions in up, down, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&dir| self.is_safe(dir))
    }

    pub fn to_vec(&self) -> Vec<Direction> {
        self.iter().collect()
    }
}

impl fmt::Display for SafeMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, dir) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{dir}")?;
        }
        f.write_str("]")
    }
}

/// Rules out backing into our neck, leaving the board, and entering occupied cells.
pub fn compute_safe_moves(state: &GameState, config: &SelectorConfig) -> SafeMoves {
    let Some(head) = state.you.head() else {
        return SafeMoves::none();
    };
    let orientation = config.orientation;
    let board = &state.board;
    let mut safe = SafeMoves::all();

    // A stacked neck (start of game) points nowhere.
    if let Some(back) = state
        .you
        .neck()
        .and_then(|neck| Direction::towards(head, neck, orientation))
    {
        safe.mark_unsafe(back);
    }

    if head.x <= 0 {
        safe.mark_unsafe(Direction::Left);
    }
    if head.x >= board.width.saturating_sub(1) {
        safe.mark_unsafe(Direction::Right);
    }
    if head.y <= 0 {
        safe.mark_unsafe(orientation.vertical(-1));
    }
    if head.y >= board.height.saturating_sub(1) {
        safe.mark_unsafe(orientation.vertical(1));
    }

    for dir in Direction::ALL {
        if !safe.is_safe(dir) {
            continue;
        }
        let next = head.offset(dir.delta(orientation));
        if is_occupied(next, state, config.tail_policy) {
            safe.mark_unsafe(dir);
        }
    }

    safe
}
