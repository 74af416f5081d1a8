//! Personality and character variants.
//!
//! Personality is fixed at creation: it shifts the starting stats and
//! sets the tonal register used when composing prompts for the language
//! model. Character is purely cosmetic.

use crate::actions::StatPatch;
use crate::error::PetError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Playful,
    Shy,
    Curious,
    Lazy,
    Energetic,
}

impl Personality {
    /// One-line temperament description, used in the persona preamble.
    pub fn description(&self) -> &'static str {
        match self {
            Personality::Playful => "Loves games and fun activities",
            Personality::Shy => "Gentle and needs encouragement",
            Personality::Curious => "Always asking questions",
            Personality::Lazy => "Prefers relaxing activities",
            Personality::Energetic => "Always ready for action",
        }
    }

    /// Tonal register for generated replies.
    pub fn chat_style(&self) -> &'static str {
        match self {
            Personality::Playful => "enthusiastic and energetic",
            Personality::Shy => "quiet and thoughtful",
            Personality::Curious => "inquisitive and clever",
            Personality::Lazy => "calm and easygoing",
            Personality::Energetic => "excited and active",
        }
    }

    /// Base-stat overrides applied once, at creation, over full stats.
    /// Hunger and hygiene always start full; temperament only shifts
    /// happiness and energy.
    pub fn base_stats(&self) -> StatPatch {
        let (happiness, energy) = match self {
            Personality::Playful => (80.0, 90.0),
            Personality::Shy => (60.0, 70.0),
            Personality::Curious => (75.0, 85.0),
            Personality::Lazy => (70.0, 50.0),
            Personality::Energetic => (85.0, 95.0),
        };
        StatPatch {
            happiness: Some(happiness),
            energy: Some(energy),
            ..StatPatch::default()
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Playful => "playful",
            Personality::Shy => "shy",
            Personality::Curious => "curious",
            Personality::Lazy => "lazy",
            Personality::Energetic => "energetic",
        }
    }
}

impl FromStr for Personality {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "playful" => Ok(Personality::Playful),
            "shy" => Ok(Personality::Shy),
            "curious" => Ok(Personality::Curious),
            "lazy" => Ok(Personality::Lazy),
            "energetic" => Ok(Personality::Energetic),
            other => Err(PetError::InvalidPersonality(other.to_string())),
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which artwork set the pet uses. No behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Mochi,
    Biscuit,
    Pepper,
}

impl Character {
    pub fn display_name(&self) -> &'static str {
        match self {
            Character::Mochi => "Mochi",
            Character::Biscuit => "Biscuit",
            Character::Pepper => "Pepper",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Mochi => "mochi",
            Character::Biscuit => "biscuit",
            Character::Pepper => "pepper",
        }
    }
}

impl FromStr for Character {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mochi" => Ok(Character::Mochi),
            "biscuit" => Ok(Character::Biscuit),
            "pepper" => Ok(Character::Pepper),
            other => Err(PetError::InvalidCharacter(other.to_string())),
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
