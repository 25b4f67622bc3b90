//! Per-turn move selection for a Battlesnake.
//!
//! A turn runs two stages: [`safety::compute_safe_moves`] rules out directions that
//! kill us this tick (with [`occupancy::is_occupied`] answering per-cell questions),
//! then [`food::choose_move`] heads for the nearest food or picks a random safe
//! direction. [`MoveSelector`] ties them together under one [`SelectorConfig`].

pub mod food;
pub mod geometry;
pub mod occupancy;
pub mod policy;
pub mod safety;
pub mod selector;
pub mod tiebreak;
pub mod wire;

#[cfg(test)]
mod testing;

pub use food::Choice;
pub use geometry::{Direction, Orientation, Point};
pub use policy::{FallbackPolicy, Preset, SelectorConfig, TailPolicy};
pub use safety::SafeMoves;
pub use selector::{Decision, MoveSelector};
pub use tiebreak::TieBreak;
pub use wire::{decode_state, GameState, InfoResponse, MoveResponse};
