//! Care actions and their fixed stat effects.

use crate::error::PetError;
use crate::state::PetStats;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A partial stat update: only the fields that are `Some` are applied.
/// Values are raw (unclamped) targets; the store clamps after merging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatPatch {
    pub hunger: Option<f32>,
    pub happiness: Option<f32>,
    pub energy: Option<f32>,
    pub hygiene: Option<f32>,
}

/// A discrete user-invoked care operation. Effects are deterministic:
/// the same starting stats and the same action always produce the same
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Feed,
    Play,
    Clean,
    Sleep,
}

impl Action {
    /// Compute the target stat values for this action against the given
    /// snapshot. All affected fields are computed from the snapshot, not
    /// sequentially from each other.
    pub fn effect(&self, stats: &PetStats) -> StatPatch {
        match self {
            Action::Feed => StatPatch {
                hunger: Some(stats.hunger + 30.0),
                happiness: Some(stats.happiness + 5.0),
                ..StatPatch::default()
            },
            Action::Play => StatPatch {
                happiness: Some(stats.happiness + 25.0),
                energy: Some(stats.energy - 15.0),
                hunger: Some(stats.hunger - 10.0),
                ..StatPatch::default()
            },
            Action::Clean => StatPatch {
                hygiene: Some(stats.hygiene + 40.0),
                happiness: Some(stats.happiness + 10.0),
                ..StatPatch::default()
            },
            Action::Sleep => StatPatch {
                energy: Some(stats.energy + 35.0),
                happiness: Some(stats.happiness + 5.0),
                ..StatPatch::default()
            },
        }
    }

    /// The flavor line the pet says after this action.
    pub fn flavor_message(&self) -> &'static str {
        match self {
            Action::Feed => "Mmm, delicious! Thanks for feeding me!",
            Action::Play => "That was so much fun! I love playing with you!",
            Action::Clean => "Ahh, much better! I'm all clean now!",
            Action::Sleep => "Zzz... that was a refreshing nap!",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Feed => "feed",
            Action::Play => "play",
            Action::Clean => "clean",
            Action::Sleep => "sleep",
        }
    }
}

impl FromStr for Action {
    type Err = PetError;

    /// Unknown action tokens are rejected here; past this boundary the
    /// closed enum makes them unrepresentable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" => Ok(Action::Feed),
            "play" => Ok(Action::Play),
            "clean" => Ok(Action::Clean),
            "sleep" => Ok(Action::Sleep),
            other => Err(PetError::InvalidAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
