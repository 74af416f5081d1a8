//! The pet state store.

use chrono::{DateTime, Utc};
use momo_core::{
    Action, Character, ChatMessage, Clock, Mood, Personality, PetState, PetStats, StatPatch,
};
use momo_memory::PersistenceAdapter;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Owns the one `PetState` of the session. All mutation entry points
/// live here; other components read snapshots or subscribe to the watch
/// channel.
pub struct PetStore {
    state: RwLock<PetState>,
    clock: Arc<dyn Clock>,
    persistence: PersistenceAdapter,
    watch_tx: watch::Sender<PetState>,
    watch_rx: watch::Receiver<PetState>,
}

impl PetStore {
    pub fn new(state: PetState, clock: Arc<dyn Clock>, persistence: PersistenceAdapter) -> Self {
        let (watch_tx, watch_rx) = watch::channel(state.clone());
        Self {
            state: RwLock::new(state),
            clock,
            persistence,
            watch_tx,
            watch_rx,
        }
    }

    /// Restore the saved pet, or create a fresh one when nothing usable
    /// is stored. Corrupt saves are treated as absent.
    pub async fn load_or_create(
        clock: Arc<dyn Clock>,
        persistence: PersistenceAdapter,
        name: &str,
        personality: Personality,
        character: Character,
    ) -> Self {
        let state = match persistence.load().await {
            Some(state) => {
                tracing::info!("Restored pet '{}' from saved state", state.name);
                state
            }
            None => {
                tracing::info!("No saved state, creating pet '{}'", name);
                PetState::new(name, personality, character, clock.now())
            }
        };
        Self::new(state, clock, persistence)
    }

    /// Run one mutation under the write lock, then broadcast and
    /// persist the result. The snapshot handed to subscribers and to
    /// storage is always the fully-updated state.
    async fn mutate<R>(&self, f: impl FnOnce(&mut PetState, DateTime<Utc>) -> R) -> R {
        let now = self.clock.now();
        let (result, snapshot) = {
            let mut state = self.state.write().await;
            let result = f(&mut state, now);
            (result, state.clone())
        };
        let _ = self.watch_tx.send(snapshot.clone());
        // Persistence is opportunistic: a failed write must never fail
        // the operation itself.
        if let Err(e) = self.persistence.save(&snapshot).await {
            tracing::warn!("Failed to persist pet state: {e:#}");
        }
        result
    }

    /// Replace the whole state with a fresh pet. Also serves as the
    /// explicit reset.
    pub async fn create_pet(
        &self,
        name: &str,
        personality: Personality,
        character: Character,
    ) -> PetState {
        self.mutate(|state, now| {
            *state = PetState::new(name, personality, character, now);
            state.clone()
        })
        .await
    }

    /// Merge a partial stat update, clamp, reclassify mood, and advance
    /// the interaction baseline.
    pub async fn update_stats(&self, patch: StatPatch) -> PetStats {
        self.mutate(|state, now| {
            state.stats.merge(&patch);
            state.stats.clamp();
            state.mood = Mood::classify(&state.stats);
            state.last_interaction = now;
            state.stats
        })
        .await
    }

    /// Apply a care action: deterministic stat deltas, mood
    /// reclassification, and one pet-authored flavor message tagged with
    /// the new mood. Returns the appended message.
    pub async fn perform_action(&self, action: Action) -> ChatMessage {
        self.mutate(|state, now| {
            let patch = action.effect(&state.stats);
            state.stats.merge(&patch);
            state.stats.clamp();
            state.mood = Mood::classify(&state.stats);
            state.last_interaction = now;

            let message = ChatMessage::from_pet(action.flavor_message(), now, state.mood);
            state.conversation_history.push(message.clone());
            message
        })
        .await
    }

    /// Append a chat message. Advances the interaction baseline but
    /// leaves stats and mood alone.
    pub async fn add_chat_message(&self, message: ChatMessage) {
        self.mutate(|state, now| {
            state.conversation_history.push(message);
            state.last_interaction = now;
        })
        .await
    }

    /// Explicit mood override, used by the conversational flow. The
    /// numeric classifier reclaims the mood on the next stat mutation.
    pub async fn set_mood(&self, mood: Mood) {
        self.mutate(|state, now| {
            state.mood = mood;
            state.last_interaction = now;
        })
        .await
    }

    /// Cosmetic rename. Not an interaction: the decay baseline stays
    /// where it was.
    pub async fn set_name(&self, name: &str) {
        self.mutate(|state, _now| {
            state.name = name.to_string();
        })
        .await
    }

    /// Cosmetic character swap; same rules as [`PetStore::set_name`].
    pub async fn set_character(&self, character: Character) {
        self.mutate(|state, _now| {
            state.character = character;
        })
        .await
    }

    pub async fn needs_attention(&self) -> bool {
        self.state.read().await.stats.needs_attention()
    }

    pub async fn mood_indicator(&self) -> &'static str {
        self.state.read().await.mood.indicator()
    }

    /// Cloned snapshot of the full state.
    pub async fn state(&self) -> PetState {
        self.state.read().await.clone()
    }

    /// Subscribe to state snapshots; one is broadcast after every
    /// mutation.
    pub fn subscribe(&self) -> watch::Receiver<PetState> {
        self.watch_rx.clone()
    }
}
