//! Conversational exchange with the text-generation collaborator.
//!
//! One exchange at a time: Idle → Sending → Fulfilled or Fallback. The
//! user's turn always lands in the log before the pet's reply, and no
//! failure mode of the remote collaborator ever escapes; the worst
//! case is a locally generated fallback line.

pub mod fallback;
pub mod llm;
pub mod orchestrator;
pub mod prompt;
pub mod providers;

pub use llm::{ChatTurn, LlmClient, Role};
pub use orchestrator::ChatOrchestrator;
