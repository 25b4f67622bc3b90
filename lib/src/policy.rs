use std::str::FromStr;

use color_eyre::eyre::{eyre, Report};
use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, Orientation};

/// Whether a snake's tail counts as an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPolicy {
    /// The tail moves away next turn, so its cell is free to enter.
    #[default]
    Vacates,
    /// Every body segment blocks, the tail included.
    Blocks,
}

impl FromStr for TailPolicy {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vacates" => Ok(TailPolicy::Vacates),
            "blocks" => Ok(TailPolicy::Blocks),
            other => Err(eyre!("unknown tail policy {other:?}, expected vacates or blocks")),
        }
    }
}

/// What to answer when no direction is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    Fixed(Direction),
    /// Uniform over all four directions.
    Random,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::Fixed(Direction::Up)
    }
}

impl FromStr for FallbackPolicy {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(FallbackPolicy::Random);
        }
        s.parse::<Direction>()
            .map(FallbackPolicy::Fixed)
            .map_err(|_| eyre!("unknown fallback {s:?}, expected random or a direction"))
    }
}

/// Named policy sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Tails block and a cornered snake picks any direction at random.
    Strict,
    /// Tails vacate and a cornered snake always answers `up`.
    #[default]
    Relaxed,
}

impl FromStr for Preset {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Preset::Strict),
            "relaxed" => Ok(Preset::Relaxed),
            other => Err(eyre!("unknown preset {other:?}, expected strict or relaxed")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub orientation: Orientation,
    pub tail_policy: TailPolicy,
    pub fallback: FallbackPolicy,
}

impl SelectorConfig {
    pub fn strict() -> Self {
        Self {
            orientation: Orientation::YUp,
            tail_policy: TailPolicy::Blocks,
            fallback: FallbackPolicy::Random,
        }
    }

    pub fn relaxed() -> Self {
        Self {
            orientation: Orientation::YUp,
            tail_policy: TailPolicy::Vacates,
            fallback: FallbackPolicy::Fixed(Direction::Up),
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

impl From<Preset> for SelectorConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self::strict(),
            Preset::Relaxed => Self::relaxed(),
        }
    }
}
