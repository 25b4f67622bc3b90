use tracing::{debug, info};

use crate::food::{seek, Choice};
use crate::geometry::Direction;
use crate::policy::SelectorConfig;
use crate::safety::{compute_safe_moves, SafeMoves};
use crate::tiebreak::TieBreak;
use crate::wire::GameState;

/// The outcome of one turn: the move plus what led to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub choice: Choice,
    pub safe: SafeMoves,
}

impl Decision {
    pub fn direction(&self) -> Direction {
        self.choice.direction()
    }

    pub fn is_cornered(&self) -> bool {
        matches!(self.choice, Choice::Cornered(_))
    }
}

/// Safety filter followed by food seeking, parameterised by a [`SelectorConfig`].
///
/// Holds no per-game state, so one selector can serve any number of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSelector {
    config: SelectorConfig,
}

impl MoveSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn choose<T: TieBreak>(&self, state: &GameState, tiebreak: &mut T) -> Decision {
        let safe = compute_safe_moves(state, &self.config);
        debug!(turn = state.turn, %safe, "computed safe moves");
        let choice = seek(&safe, state, &self.config, tiebreak);
        match choice {
            Choice::Food { target, direction } => info!(
                "MOVE {}: {} toward food at ({}, {}) {}",
                state.turn, direction, target.x, target.y, safe
            ),
            Choice::Random(direction) => info!("MOVE {}: {} {}", state.turn, direction, safe),
            Choice::Cornered(direction) => {
                info!("MOVE {}: {} (no safe moves)", state.turn, direction)
            }
        }
        Decision { choice, safe }
    }

    pub fn choose_direction<T: TieBreak>(&self, state: &GameState, tiebreak: &mut T) -> Direction {
        self.choose(state, tiebreak).direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction::*;
    use crate::geometry::Point;
    use crate::policy::TailPolicy;
    use crate::testing::{FixedPick, NoRandom, StateBuilder};
    use crate::wire::decode_state;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const START_OF_GAME: &str = include_str!("../fixtures/start_of_game.json");
    const MID_GAME: &str = include_str!("../fixtures/mid_game.json");
    const CORNERED: &str = include_str!("../fixtures/cornered.json");

    fn fixture(text: &str) -> GameState {
        decode_state(text.to_string()).expect("valid fixture")
    }

    #[test]
    fn test_start_of_game_goes_for_food() {
        // Head at (1, 9); nearest food is (2, 10), to the right.
        let state = fixture(START_OF_GAME);
        let decision = MoveSelector::default().choose(&state, &mut NoRandom);
        assert_eq!(decision.safe, SafeMoves::all());
        assert_eq!(
            decision.choice,
            Choice::Food {
                target: Point::new(2, 10),
                direction: Right
            }
        );
    }

    #[test]
    fn test_mid_game_heads_up_to_food() {
        // Food at (7, 9) straight above the head at (7, 4).
        let state = fixture(MID_GAME);
        let decision = MoveSelector::default().choose(&state, &mut NoRandom);
        assert!(!decision.safe.is_safe(Left));
        assert_eq!(decision.direction(), Up);
    }

    #[test]
    fn test_cornered_fixture_per_preset() {
        let state = fixture(CORNERED);

        let relaxed = MoveSelector::new(SelectorConfig::relaxed());
        let decision = relaxed.choose(&state, &mut NoRandom);
        assert_eq!(decision.safe.to_vec(), vec![Up]);
        assert_eq!(decision.direction(), Up);
        assert!(!decision.is_cornered());

        let strict = MoveSelector::new(SelectorConfig::strict());
        let decision = strict.choose(&state, &mut FixedPick(3));
        assert!(decision.is_cornered());
        assert!(decision.safe.is_empty());
        assert_eq!(decision.direction(), Right);
    }

    #[test]
    fn test_result_is_always_safe_when_possible() {
        let states = [fixture(START_OF_GAME), fixture(MID_GAME), fixture(CORNERED)];
        let mut rng = StdRng::seed_from_u64(2024);
        for config in [SelectorConfig::relaxed(), SelectorConfig::strict()] {
            let selector = MoveSelector::new(config);
            for state in &states {
                for _ in 0..25 {
                    let decision = selector.choose(state, &mut rng);
                    if decision.safe.is_empty() {
                        assert!(Direction::ALL.contains(&decision.direction()));
                    } else {
                        assert!(decision.safe.is_safe(decision.direction()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_far_away_food_does_not_panic() {
        let body = r#"{
            "board": {"width": 11, "height": 11, "food": [{"x": -2147483648, "y": 0}], "snakes": []},
            "you": {"id": "a", "body": [{"x": 5, "y": 5}]}
        }"#;
        let state = fixture(body);
        let decision = MoveSelector::default().choose(&state, &mut NoRandom);
        assert_eq!(
            decision.choice,
            Choice::Food {
                target: Point::new(i32::MIN, 0),
                direction: Left
            }
        );
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let state = StateBuilder::new(&[(5, 5), (5, 4), (5, 3)]).turn(9).build();
        let selector = MoveSelector::new(SelectorConfig::strict());
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| selector.choose_direction(&state, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_tail_policy_flag_is_honoured() {
        // The opponent's tail sits right of our head; food lies beyond it.
        let state = StateBuilder::new(&[(5, 5), (4, 5), (3, 5)])
            .opponent("them", &[(6, 3), (6, 4), (6, 5)])
            .food(&[(9, 5)])
            .build();
        let config = SelectorConfig::default();

        let vacates = MoveSelector::new(config.with_tail_policy(TailPolicy::Vacates));
        assert_eq!(vacates.choose_direction(&state, &mut NoRandom), Right);

        let blocks = MoveSelector::new(config.with_tail_policy(TailPolicy::Blocks));
        let decision = blocks.choose(&state, &mut FixedPick(0));
        assert!(!decision.safe.is_safe(Right));
        assert_eq!(decision.direction(), Up);
    }
}
