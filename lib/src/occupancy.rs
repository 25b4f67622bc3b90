use crate::geometry::Point;
use crate::policy::TailPolicy;
use crate::wire::{GameState, Snake};

/// Whether moving our head into `cell` would be unsafe this turn.
///
/// A cell is occupied when it is a hazard, a body segment of any snake (the tail
/// only under [`TailPolicy::Blocks`]), or next to the head of an opponent at least
/// as long as we are.
pub fn is_occupied(cell: Point, state: &GameState, tail_policy: TailPolicy) -> bool {
    state.board.hazards.contains(&cell)
        || state
            .board
            .snakes
            .iter()
            .any(|snake| blocking_segments(snake, tail_policy).contains(&cell))
        || threatened_by_head(cell, state)
}

fn blocking_segments(snake: &Snake, tail_policy: TailPolicy) -> &[Point] {
    match tail_policy {
        TailPolicy::Vacates => snake.segments_without_tail(),
        TailPolicy::Blocks => &snake.body,
    }
}

/// A cell an opponent of equal or greater length could also move into.
fn threatened_by_head(cell: Point, state: &GameState) -> bool {
    let own_length = state.you.body.len();
    state
        .opponents()
        .filter(|opponent| opponent.body.len() >= own_length)
        .filter_map(Snake::head)
        .any(|head| head.is_adjacent(cell))
}
