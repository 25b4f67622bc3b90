use tracing::warn;

use crate::geometry::{Direction, Point};
use crate::policy::{FallbackPolicy, SelectorConfig};
use crate::safety::SafeMoves;
use crate::tiebreak::TieBreak;
use crate::wire::GameState;

/// How a direction was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Heading for the food at `target`.
    Food { target: Point, direction: Direction },
    /// A random safe direction.
    Random(Direction),
    /// Nothing was safe; the fallback policy answered.
    Cornered(Direction),
}

impl Choice {
    pub fn direction(self) -> Direction {
        match self {
            Choice::Food { direction, .. }
            | Choice::Random(direction)
            | Choice::Cornered(direction) => direction,
        }
    }
}

/// The closest food by Manhattan distance; the earliest wins a tie.
pub fn nearest_food(head: Point, food: &[Point]) -> Option<Point> {
    food.iter().copied().min_by_key(|&f| head.manhattan_distance(f))
}

/// Picks a direction among `safe`, preferring the one leading to the nearest food.
pub fn choose_move<T: TieBreak>(
    safe: &SafeMoves,
    state: &GameState,
    config: &SelectorConfig,
    tiebreak: &mut T,
) -> Direction {
    seek(safe, state, config, tiebreak).direction()
}

/// Like [`choose_move`] but also reports why the direction was chosen.
pub fn seek<T: TieBreak>(
    safe: &SafeMoves,
    state: &GameState,
    config: &SelectorConfig,
    tiebreak: &mut T,
) -> Choice {
    let candidates = safe.to_vec();
    if candidates.is_empty() {
        let direction = fallback(config.fallback, tiebreak);
        warn!(turn = state.turn, %direction, "no safe moves detected");
        return Choice::Cornered(direction);
    }

    if let Some(head) = state.you.head() {
        if let Some(target) = nearest_food(head, &state.board.food) {
            let preferred = [
                Direction::horizontal_towards(head, target),
                Direction::vertical_towards(head, target, config.orientation),
            ];
            if let Some(direction) = preferred
                .into_iter()
                .flatten()
                .find(|&dir| safe.is_safe(dir))
            {
                return Choice::Food { target, direction };
            }
        }
    }

    match tiebreak.pick(&candidates) {
        Some(direction) => Choice::Random(direction),
        None => Choice::Cornered(fallback(config.fallback, tiebreak)),
    }
}

fn fallback<T: TieBreak>(policy: FallbackPolicy, tiebreak: &mut T) -> Direction {
    match policy {
        FallbackPolicy::Fixed(direction) => direction,
        FallbackPolicy::Random => tiebreak.pick(&Direction::ALL).unwrap_or(Direction::Up),
    }
}
