//! Canonical pet state model.
//!
//! `PetState` is the single source of truth for one pet. It is owned
//! exclusively by the store in `momo_store`; everything else reads
//! snapshots. All four needs live in [0, 100] and are re-clamped after
//! every mutation.

use crate::actions::StatPatch;
use crate::mood::Mood;
use crate::persona::{Character, Personality};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Guard against NaN and Infinity sneaking in through arithmetic or a
/// hand-edited save file. Non-finite values reset to the fallback.
#[inline]
fn sanitize_stat(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        tracing::warn!("non-finite stat value, resetting to {}", fallback);
        fallback
    }
}

/// The four bounded needs. Each decays over time and is restored by
/// care actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetStats {
    pub hunger: f32,
    pub happiness: f32,
    pub energy: f32,
    pub hygiene: f32,
}

impl Default for PetStats {
    fn default() -> Self {
        // A freshly created pet starts fully cared for.
        Self {
            hunger: 100.0,
            happiness: 100.0,
            energy: 100.0,
            hygiene: 100.0,
        }
    }
}

impl PetStats {
    /// Merge the fields present in `patch` into `self`. Does not clamp;
    /// callers run [`PetStats::clamp`] after every merge.
    pub fn merge(&mut self, patch: &StatPatch) {
        if let Some(v) = patch.hunger {
            self.hunger = v;
        }
        if let Some(v) = patch.happiness {
            self.happiness = v;
        }
        if let Some(v) = patch.energy {
            self.energy = v;
        }
        if let Some(v) = patch.hygiene {
            self.hygiene = v;
        }
    }

    /// Clamp all needs to [0, 100], recovering from non-finite values.
    pub fn clamp(&mut self) {
        self.hunger = sanitize_stat(self.hunger, 50.0).clamp(0.0, 100.0);
        self.happiness = sanitize_stat(self.happiness, 50.0).clamp(0.0, 100.0);
        self.energy = sanitize_stat(self.energy, 50.0).clamp(0.0, 100.0);
        self.hygiene = sanitize_stat(self.hygiene, 50.0).clamp(0.0, 100.0);
    }

    /// True when any need has dropped far enough that the pet should be
    /// cared for. Thresholds are independent per need; they are never
    /// averaged together.
    pub fn needs_attention(&self) -> bool {
        self.hunger < 30.0 || self.happiness < 30.0 || self.energy < 20.0 || self.hygiene < 30.0
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Pet,
}

/// One turn in the conversation log. Pet-authored messages carry the
/// mood the pet was in when it spoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl ChatMessage {
    pub fn from_user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            content: content.into(),
            timestamp,
            mood: None,
        }
    }

    pub fn from_pet(content: impl Into<String>, timestamp: DateTime<Utc>, mood: Mood) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Pet,
            content: content.into(),
            timestamp,
            mood: Some(mood),
        }
    }
}

/// Complete state of one pet. Created once per session, mutated only
/// through the store, persisted opportunistically after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub id: Uuid,
    pub name: String,
    pub character: Character,
    pub personality: Personality,
    pub stats: PetStats,
    pub mood: Mood,
    /// Baseline for decay: advanced exactly once per stat, chat, or mood
    /// mutation. Cosmetic renames do not touch it.
    pub last_interaction: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Append-only; insertion order is chronological order.
    pub conversation_history: Vec<ChatMessage>,
}

impl PetState {
    /// Build a fresh pet: full stats overridden by the personality's
    /// base values, mood classified from those stats, and one welcome
    /// message authored by the pet.
    pub fn new(
        name: impl Into<String>,
        personality: Personality,
        character: Character,
        now: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let mut stats = PetStats::default();
        stats.merge(&personality.base_stats());
        stats.clamp();

        let welcome = ChatMessage::from_pet(
            format!("Hi! I'm {}! I'm so happy to meet you!", name),
            now,
            Mood::Excited,
        );

        Self {
            id: Uuid::new_v4(),
            name,
            character,
            personality,
            mood: Mood::classify(&stats),
            stats,
            last_interaction: now,
            created_at: now,
            conversation_history: vec![welcome],
        }
    }
}
