//! Wall-clock decay: needs erode over real elapsed time, including time
//! the process spent suspended or unobserved.
//!
//! The scheduler owns no state of its own: the decay baseline is the
//! pet's `last_interaction`, which `update_stats` advances, so applying
//! decay naturally resets it. The host drives cadence: a periodic tick
//! plus a catch-up call whenever the session resumes.

use crate::store::PetStore;
use chrono::{DateTime, Utc};
use momo_core::StatPatch;

/// Per-minute erosion rates.
#[derive(Debug, Clone, Copy)]
pub struct DecayRates {
    pub hunger: f32,
    pub happiness: f32,
    pub energy: f32,
    pub hygiene: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 2.0,
            happiness: 1.0,
            energy: 1.5,
            hygiene: 0.8,
        }
    }
}

/// Below this much elapsed time a trigger is a no-op. Absorbs rapid
/// re-triggering and clock skew (negative elapsed included).
const MIN_ELAPSED_MINUTES: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct DecayScheduler {
    rates: DecayRates,
}

impl DecayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: DecayRates) -> Self {
        Self { rates }
    }

    /// Apply linear decay for the time elapsed since the pet was last
    /// interacted with. Returns true when decay was applied, false when
    /// the debounce window swallowed the trigger.
    ///
    /// Decay is monotonically non-increasing: it never raises a stat,
    /// and each stat bottoms out at 0.
    pub async fn tick(&self, store: &PetStore, now: DateTime<Utc>) -> bool {
        let snapshot = store.state().await;
        let elapsed_minutes =
            (now - snapshot.last_interaction).num_milliseconds() as f32 / 60_000.0;

        if elapsed_minutes < MIN_ELAPSED_MINUTES {
            return false;
        }

        let stats = snapshot.stats;
        let patch = StatPatch {
            hunger: Some((stats.hunger - self.rates.hunger * elapsed_minutes).max(0.0)),
            happiness: Some((stats.happiness - self.rates.happiness * elapsed_minutes).max(0.0)),
            energy: Some((stats.energy - self.rates.energy * elapsed_minutes).max(0.0)),
            hygiene: Some((stats.hygiene - self.rates.hygiene * elapsed_minutes).max(0.0)),
        };

        tracing::debug!("applying {:.1} minutes of decay", elapsed_minutes);
        store.update_stats(patch).await;
        true
    }

    /// Resumption trigger (regained focus, session restart): catches up
    /// all backgrounded time in one shot.
    pub async fn on_resume(&self, store: &PetStore, now: DateTime<Utc>) -> bool {
        self.tick(store, now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use momo_core::{Character, ManualClock, Personality, PetStats};
    use momo_memory::{MemoryStorage, PersistenceAdapter};
    use std::sync::Arc;

    async fn full_stats_store(clock: Arc<ManualClock>) -> PetStore {
        let persistence = PersistenceAdapter::new(Arc::new(MemoryStorage::new()), "pet");
        let store = PetStore::load_or_create(
            clock,
            persistence,
            "Momo",
            Personality::Playful,
            Character::Mochi,
        )
        .await;
        // Start from a known full block, not the personality baseline.
        store
            .update_stats(StatPatch {
                hunger: Some(100.0),
                happiness: Some(100.0),
                energy: Some(100.0),
                hygiene: Some(100.0),
            })
            .await;
        store
    }

    #[tokio::test]
    async fn test_ten_minutes_of_decay_from_full() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        clock.advance(Duration::minutes(10));
        let applied = scheduler.tick(&store, clock.now()).await;
        assert!(applied);

        let stats = store.state().await.stats;
        assert!((stats.hunger - 80.0).abs() < 1e-3, "hunger: {}", stats.hunger);
        assert!(
            (stats.happiness - 90.0).abs() < 1e-3,
            "happiness: {}",
            stats.happiness
        );
        assert!((stats.energy - 85.0).abs() < 1e-3, "energy: {}", stats.energy);
        assert!(
            (stats.hygiene - 92.0).abs() < 1e-3,
            "hygiene: {}",
            stats.hygiene
        );
    }

    #[tokio::test]
    async fn test_debounce_swallows_rapid_retriggers() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        clock.advance(Duration::minutes(10));
        assert!(scheduler.tick(&store, clock.now()).await);
        let after_first = store.state().await.stats;

        // Immediately after, elapsed is ~0, so the second tick is a no-op.
        clock.advance(Duration::seconds(5));
        assert!(!scheduler.tick(&store, clock.now()).await);
        assert_eq!(store.state().await.stats, after_first);
    }

    #[tokio::test]
    async fn test_negative_elapsed_is_a_no_op() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        // Clock skew: "now" earlier than the baseline.
        let skewed = clock.now() - Duration::minutes(30);
        assert!(!scheduler.tick(&store, skewed).await);
    }

    #[tokio::test]
    async fn test_decay_never_increases_a_stat() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        let mut prev = store.state().await.stats;
        for _ in 0..6 {
            clock.advance(Duration::minutes(7));
            scheduler.tick(&store, clock.now()).await;
            let next = store.state().await.stats;
            assert!(next.hunger <= prev.hunger);
            assert!(next.happiness <= prev.happiness);
            assert!(next.energy <= prev.energy);
            assert!(next.hygiene <= prev.hygiene);
            prev = next;
        }
    }

    #[tokio::test]
    async fn test_long_absence_bottoms_out_at_zero() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        // A week away: every rate times this dwarfs 100 points.
        clock.advance(Duration::days(7));
        scheduler.on_resume(&store, clock.now()).await;

        let stats = store.state().await.stats;
        assert_eq!(
            stats,
            PetStats {
                hunger: 0.0,
                happiness: 0.0,
                energy: 0.0,
                hygiene: 0.0
            }
        );
    }

    #[tokio::test]
    async fn test_decay_resets_its_own_baseline() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = full_stats_store(clock.clone()).await;
        let scheduler = DecayScheduler::new();

        clock.advance(Duration::minutes(10));
        scheduler.tick(&store, clock.now()).await;
        assert_eq!(store.state().await.last_interaction, clock.now());

        // Another 10 minutes decays from the new baseline, not from the
        // original one. No double counting.
        clock.advance(Duration::minutes(10));
        scheduler.tick(&store, clock.now()).await;
        let stats = store.state().await.stats;
        assert!((stats.hunger - 60.0).abs() < 1e-3, "hunger: {}", stats.hunger);
    }
}
