//! Domain error taxonomy.
//!
//! Everything here is recoverable: the simulation always has a
//! well-defined next state. Remote-collaborator failures and corrupt
//! persisted state never surface as errors at all; they resolve to the
//! local fallback response and a fresh default pet respectively.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetError {
    /// Unknown action token; the state is left untouched.
    #[error("unknown action '{0}' (expected feed, play, clean, or sleep)")]
    InvalidAction(String),

    #[error("unknown personality '{0}'")]
    InvalidPersonality(String),

    #[error("unknown character '{0}'")]
    InvalidCharacter(String),

    /// Chat submissions must carry text.
    #[error("message is empty")]
    EmptyMessage,

    /// The pet is too unhappy to chat until it gets some care. This is
    /// an interaction lockout, not a transport failure.
    #[error("{name} is too unhappy to chat right now, some care might help")]
    TooUnhappy { name: String },

    /// A chat exchange is already in flight; new submissions are
    /// rejected rather than queued.
    #[error("a chat exchange is already in flight")]
    ConcurrentSubmission,
}
