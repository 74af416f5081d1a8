//! Single owner of the canonical pet state.
//!
//! Every mutation in the system funnels through [`PetStore`]: decay
//! ticks, care actions, chat appends, mood overrides. Each operation
//! takes the write lock once, leaves the state fully consistent, and
//! broadcasts a snapshot before persisting, so no caller can ever observe
//! a half-applied update.

pub mod decay;
pub mod store;

pub use decay::{DecayRates, DecayScheduler};
pub use store::PetStore;
