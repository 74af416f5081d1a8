//! Deterministic local responses for when the collaborator is missing
//! or misbehaving.
//!
//! Keyword matching against the user's message comes first; when
//! nothing matches, a canned line keyed to the current mood is chosen
//! at random. This path never fails and never returns an empty string.

use momo_core::{Mood, PetState};
use rand::seq::SliceRandom;

const HAPPY_LINES: &[&str] = &[
    "I'm so happy today! How are you doing?",
    "What a lovely day! Want to play together?",
    "I'm full of energy! Tell me something fun!",
];

const SAD_LINES: &[&str] = &[
    "I'm feeling a little down... could you cuddle me for a bit?",
    "Today isn't a great day for me...",
    "I could use some attention... will you help me?",
];

const HUNGRY_LINES: &[&str] = &[
    "I'm starving! Is there anything good to eat?",
    "My tummy is rumbling... is it dinner time?",
    "Mmm... I smell food! Can I have some?",
];

const SLEEPY_LINES: &[&str] = &[
    "Zzz... I'm so sleepy...",
    "My little eyes keep closing on their own...",
    "So drowsy... is it nap time?",
];

const DIRTY_LINES: &[&str] = &[
    "Bleh! I need a nice bath!",
    "I feel all grubby... will you help me wash up?",
    "Ugh, I don't like being this messy!",
];

const EXCITED_LINES: &[&str] = &[
    "WOW! I'm super excited! What are we doing?",
    "I can't sit still, I'm so thrilled!",
    "What energy! I'm ready for any adventure!",
];

const CONTENT_LINES: &[&str] = &[
    "I feel calm and peaceful...",
    "Everything's fine, I'm very relaxed...",
    "What a nice feeling of quiet...",
];

fn mood_lines(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => HAPPY_LINES,
        Mood::Sad => SAD_LINES,
        Mood::Hungry => HUNGRY_LINES,
        Mood::Sleepy => SLEEPY_LINES,
        Mood::Dirty => DIRTY_LINES,
        Mood::Excited => EXCITED_LINES,
        Mood::Content => CONTENT_LINES,
    }
}

fn has_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

/// "hi" would match inside "this", so short greetings are compared as
/// whole words.
fn has_word(message: &str, word: &str) -> bool {
    message
        .split_whitespace()
        .any(|w| w.trim_matches(|c: char| !c.is_alphanumeric()) == word)
}

/// Produce a reply to the user's message from local state alone.
pub fn respond(user_message: &str, state: &PetState) -> String {
    let msg = user_message.to_lowercase();
    let stats = &state.stats;

    if has_any(&msg, &["hello", "hey", "hiya"]) || has_word(&msg, "hi") {
        let feeling = if state.mood == Mood::Happy {
            "so happy you're here"
        } else {
            "glad you're here"
        };
        return format!("Hi! I'm {} and I'm {}! How's it going?", state.name, feeling);
    }

    if has_any(&msg, &["how are you", "how's it going", "how is it going"]) {
        if stats.hunger < 30.0 {
            return "Well, I'm pretty hungry... could you get me something to eat?".to_string();
        }
        if stats.happiness < 30.0 {
            return "I'm not feeling great... would you play with me?".to_string();
        }
        if stats.energy < 30.0 {
            return "I'm a little worn out... maybe I should rest for a bit...".to_string();
        }
        if stats.hygiene < 30.0 {
            return "Um... I think I could really use a bath!".to_string();
        }
        return "I'm doing great! It's a wonderful day!".to_string();
    }

    if has_any(&msg, &["thank"]) {
        return "You're welcome! I always love spending time with you!".to_string();
    }

    if has_any(&msg, &["love you", "love"]) {
        return "Aww! I love you too, so much! You're the best!".to_string();
    }

    if has_any(&msg, &["story", "tell me about"]) {
        return "Oh, I love stories! Once I dreamed I was flying over the clouds... it was magical!"
            .to_string();
    }

    if has_any(&msg, &["play", "game"]) {
        return "Yes yes yes! I love playing! What should we do?".to_string();
    }

    let lines = mood_lines(state.mood);
    lines
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(lines[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use momo_core::{Character, Personality, PetState};

    fn pet() -> PetState {
        PetState::new("Momo", Personality::Playful, Character::Mochi, Utc::now())
    }

    #[test]
    fn test_greeting_mentions_the_pet_name() {
        let reply = respond("Hello there!", &pet());
        assert!(reply.contains("Momo"));
    }

    #[test]
    fn test_short_hi_is_a_greeting_but_this_is_not() {
        assert!(respond("hi", &pet()).contains("Momo"));
        // "this" must not be read as a greeting
        let reply = respond("this", &pet());
        assert!(!reply.contains("How's it going?"));
    }

    #[test]
    fn test_how_are_you_reports_the_worst_need() {
        let mut state = pet();
        state.stats.hunger = 10.0;
        let reply = respond("how are you?", &state);
        assert!(reply.contains("hungry"));

        state.stats.hunger = 100.0;
        state.stats.hygiene = 10.0;
        let reply = respond("how are you?", &state);
        assert!(reply.contains("bath"));
    }

    #[test]
    fn test_gratitude_and_affection() {
        assert!(respond("thank you!", &pet()).contains("welcome"));
        assert!(respond("I love you", &pet()).contains("love you too"));
    }

    #[test]
    fn test_story_and_play_requests() {
        assert!(respond("tell me a story", &pet()).contains("stories"));
        assert!(respond("want to play a game?", &pet()).contains("playing"));
    }

    #[test]
    fn test_unmatched_message_yields_mood_line() {
        let mut state = pet();
        state.mood = Mood::Sleepy;
        let reply = respond("qwerty asdf", &state);
        assert!(SLEEPY_LINES.contains(&reply.as_str()));
    }

    #[test]
    fn test_never_empty_for_any_mood() {
        let mut state = pet();
        for mood in [
            Mood::Happy,
            Mood::Sad,
            Mood::Hungry,
            Mood::Sleepy,
            Mood::Dirty,
            Mood::Excited,
            Mood::Content,
        ] {
            state.mood = mood;
            assert!(!respond("zzzz", &state).is_empty());
        }
    }
}
