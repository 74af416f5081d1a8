pub mod actions;
pub mod clock;
pub mod config;
pub mod error;
pub mod mood;
pub mod persona;
pub mod state;

pub use actions::{Action, StatPatch};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MomoConfig;
pub use error::PetError;
pub use mood::Mood;
pub use persona::{Character, Personality};
pub use state::{ChatMessage, PetState, PetStats, Sender};
