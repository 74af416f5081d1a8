//! Mood classification.
//!
//! The primary classifier derives a mood from the four needs; it is the
//! only thing that sets mood during normal stat mutations. The secondary
//! classifier scans generated chat text for emotional keywords and is
//! used by the conversation flow to override the numeric verdict for a
//! single turn.

use crate::state::PetStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Hungry,
    Sleepy,
    Dirty,
    Excited,
    Content,
}

/// Keyword families for the text classifier, checked in declaration
/// order. Words are chosen to avoid being substrings of common English
/// words ("eat" is in "great", "unhappy" contains "happy").
const TEXT_FAMILIES: &[(Mood, &[&str])] = &[
    (Mood::Happy, &["happy", "glad", "cheerful", "yay"]),
    (Mood::Sad, &["sad", "gloomy", "lonely", "cry"]),
    (Mood::Hungry, &["hungry", "starving", "food", "snack"]),
    (Mood::Sleepy, &["sleepy", "tired", "nap", "snooze"]),
    (Mood::Dirty, &["dirty", "bath", "messy", "grimy"]),
    (Mood::Excited, &["excited", "wow", "thrilled", "amazing"]),
];

impl Mood {
    /// Classify the current needs into a mood.
    ///
    /// Ordered guards, first match wins. The order matters: a pet that
    /// is both filthy and starving reads as dirty, because that guard
    /// fires first.
    pub fn classify(stats: &PetStats) -> Mood {
        if stats.hygiene < 30.0 {
            Mood::Dirty
        } else if stats.hunger < 25.0 {
            Mood::Hungry
        } else if stats.energy < 20.0 {
            Mood::Sleepy
        } else if stats.happiness < 30.0 {
            Mood::Sad
        } else if stats.happiness > 80.0 && stats.hunger > 70.0 {
            Mood::Excited
        } else if stats.happiness > 60.0 {
            Mood::Happy
        } else {
            Mood::Content
        }
    }

    /// Derive a mood hint from free-form chat text.
    ///
    /// Returns the first keyword family with a hit, or `current`
    /// unchanged when nothing matches; there is no regression to a
    /// default mood.
    pub fn from_text(text: &str, current: Mood) -> Mood {
        let lower = text.to_lowercase();
        for (mood, keywords) in TEXT_FAMILIES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return *mood;
            }
        }
        current
    }

    /// Presentation token for a mood. Total over the variant set.
    pub fn indicator(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Hungry => "😋",
            Mood::Sleepy => "😴",
            Mood::Dirty => "🤢",
            Mood::Excited => "🤩",
            Mood::Content => "😌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Hungry => "hungry",
            Mood::Sleepy => "sleepy",
            Mood::Dirty => "dirty",
            Mood::Excited => "excited",
            Mood::Content => "content",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(hunger: f32, happiness: f32, energy: f32, hygiene: f32) -> PetStats {
        PetStats {
            hunger,
            happiness,
            energy,
            hygiene,
        }
    }

    #[test]
    fn test_low_hunger_classifies_hungry() {
        // hunger < 25 fires before the lower-priority guards
        assert_eq!(Mood::classify(&stats(20.0, 50.0, 50.0, 50.0)), Mood::Hungry);
    }

    #[test]
    fn test_guard_order_dirty_wins_over_hungry() {
        // Both dirty and hungry conditions hold; dirty is checked first.
        assert_eq!(Mood::classify(&stats(10.0, 50.0, 50.0, 10.0)), Mood::Dirty);
    }

    #[test]
    fn test_guard_order_hungry_wins_over_sleepy() {
        assert_eq!(Mood::classify(&stats(10.0, 50.0, 10.0, 50.0)), Mood::Hungry);
    }

    #[test]
    fn test_guard_order_sleepy_wins_over_sad() {
        assert_eq!(Mood::classify(&stats(50.0, 10.0, 10.0, 50.0)), Mood::Sleepy);
    }

    #[test]
    fn test_excited_requires_happiness_and_hunger() {
        assert_eq!(Mood::classify(&stats(85.0, 90.0, 50.0, 50.0)), Mood::Excited);
        // Not hungry enough for excited, still happy
        assert_eq!(Mood::classify(&stats(60.0, 90.0, 50.0, 50.0)), Mood::Happy);
    }

    #[test]
    fn test_happy_threshold_is_strict() {
        // happiness > 60 is strict: exactly 60 falls through to content
        assert_eq!(Mood::classify(&stats(50.0, 60.0, 50.0, 50.0)), Mood::Content);
        assert_eq!(Mood::classify(&stats(50.0, 61.0, 50.0, 50.0)), Mood::Happy);
    }

    #[test]
    fn test_middling_stats_classify_content() {
        assert_eq!(Mood::classify(&stats(50.0, 50.0, 50.0, 50.0)), Mood::Content);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let s = stats(33.0, 44.0, 55.0, 66.0);
        let first = Mood::classify(&s);
        for _ in 0..10 {
            assert_eq!(Mood::classify(&s), first);
        }
    }

    #[test]
    fn test_from_text_matches_families() {
        assert_eq!(Mood::from_text("I feel so happy today!", Mood::Content), Mood::Happy);
        assert_eq!(Mood::from_text("That makes me sad...", Mood::Content), Mood::Sad);
        assert_eq!(Mood::from_text("Is it time for a snack?", Mood::Content), Mood::Hungry);
        assert_eq!(Mood::from_text("I could use a little nap", Mood::Content), Mood::Sleepy);
        assert_eq!(Mood::from_text("I need a bath!", Mood::Content), Mood::Dirty);
        assert_eq!(Mood::from_text("Wow, that's amazing!", Mood::Content), Mood::Excited);
    }

    #[test]
    fn test_from_text_keeps_current_on_no_match() {
        assert_eq!(Mood::from_text("the weather is mild", Mood::Sleepy), Mood::Sleepy);
        assert_eq!(Mood::from_text("", Mood::Dirty), Mood::Dirty);
    }

    #[test]
    fn test_from_text_is_case_insensitive() {
        assert_eq!(Mood::from_text("I'M SO HAPPY", Mood::Content), Mood::Happy);
    }

    #[test]
    fn test_from_text_first_family_wins() {
        // Contains both happy and sad keywords; happy is checked first.
        assert_eq!(
            Mood::from_text("happy on the outside, sad inside", Mood::Content),
            Mood::Happy
        );
    }

    #[test]
    fn test_indicator_is_total() {
        for mood in [
            Mood::Happy,
            Mood::Sad,
            Mood::Hungry,
            Mood::Sleepy,
            Mood::Dirty,
            Mood::Excited,
            Mood::Content,
        ] {
            assert!(!mood.indicator().is_empty());
        }
    }
}
