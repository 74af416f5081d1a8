//! The per-exchange state machine.

use crate::llm::LlmClient;
use crate::providers::OpenAiClient;
use crate::{fallback, prompt};
use momo_core::config::LlmConfig;
use momo_core::{ChatMessage, Clock, Mood, PetError};
use momo_store::PetStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Below this happiness, a pet that already needs attention refuses to
/// chat until it gets some care.
const REFUSAL_HAPPINESS: f32 = 20.0;

/// Releases the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one user↔pet exchange at a time against the store.
///
/// Remote availability is decided once at construction from explicit
/// config; there is no ambient environment probing per message.
pub struct ChatOrchestrator {
    client: Option<Arc<dyn LlmClient>>,
    clock: Arc<dyn Clock>,
    history_window: usize,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl ChatOrchestrator {
    pub fn new(config: &LlmConfig, clock: Arc<dyn Clock>) -> Self {
        let client: Option<Arc<dyn LlmClient>> = if config.remote_available() {
            match OpenAiClient::new(config) {
                Ok(client) => {
                    tracing::info!("Chat collaborator configured (model {})", config.model);
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::warn!("Chat collaborator misconfigured ({e}), fallback-only mode");
                    None
                }
            }
        } else {
            tracing::info!("No chat API key configured, fallback-only mode");
            None
        };
        Self::with_client(client, clock, config.history_window, config.timeout_secs)
    }

    /// Direct wiring for tests and alternative providers.
    pub fn with_client(
        client: Option<Arc<dyn LlmClient>>,
        clock: Arc<dyn Clock>,
        history_window: usize,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client,
            clock,
            history_window,
            timeout: Duration::from_secs(timeout_secs),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn remote_available(&self) -> bool {
        self.client.is_some()
    }

    /// Run one exchange: append the user's message, obtain a reply
    /// (remote or fallback), append the pet's message, and reconcile
    /// mood. Returns the pet's message.
    ///
    /// Rejections (`EmptyMessage`, `TooUnhappy`, `ConcurrentSubmission`)
    /// leave the state completely untouched. Once the user's message is
    /// appended, the exchange always completes with a pet reply.
    pub async fn send_message(
        &self,
        store: &PetStore,
        text: &str,
    ) -> Result<ChatMessage, PetError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PetError::EmptyMessage);
        }

        let snapshot = store.state().await;
        if snapshot.stats.happiness < REFUSAL_HAPPINESS && snapshot.stats.needs_attention() {
            return Err(PetError::TooUnhappy {
                name: snapshot.name,
            });
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PetError::ConcurrentSubmission);
        }
        let _guard = InFlightGuard(&self.in_flight);

        // The user's turn lands in the log before anything can fail.
        store
            .add_chat_message(ChatMessage::from_user(text, self.clock.now()))
            .await;

        let remote_reply = match &self.client {
            Some(client) => {
                let system = prompt::system_prompt(&snapshot);
                let turns = prompt::context_turns(&snapshot, self.history_window, text);
                match tokio::time::timeout(self.timeout, client.complete(&system, turns)).await {
                    Ok(Ok(content)) if !content.trim().is_empty() => {
                        Some(content.trim().to_string())
                    }
                    Ok(Ok(_)) => {
                        tracing::warn!("Collaborator returned empty content, using fallback");
                        None
                    }
                    Ok(Err(e)) => {
                        tracing::warn!("Chat completion failed ({e:#}), using fallback");
                        None
                    }
                    Err(_) => {
                        tracing::warn!("Chat completion timed out, using fallback");
                        None
                    }
                }
            }
            None => None,
        };

        let message = match remote_reply {
            Some(content) => {
                // Mood may have moved (decay, actions) while the call
                // was outstanding; hint against the live value.
                let current = store.state().await.mood;
                let hint = Mood::from_text(&content, current);
                let message = ChatMessage::from_pet(content, self.clock.now(), hint);
                store.add_chat_message(message.clone()).await;
                if hint != current {
                    store.set_mood(hint).await;
                }
                message
            }
            None => {
                let state = store.state().await;
                let content = fallback::respond(text, &state);
                let message = ChatMessage::from_pet(content, self.clock.now(), state.mood);
                store.add_chat_message(message.clone()).await;
                message
            }
        };

        Ok(message)
    }
}
