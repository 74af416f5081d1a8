//! Prompt assembly: persona preamble, qualitative need snapshot, mood,
//! and a bounded window of recent conversation.

use crate::llm::ChatTurn;
use momo_core::{PetState, Sender};

fn hunger_label(v: f32) -> &'static str {
    if v < 30.0 {
        "very hungry"
    } else if v < 60.0 {
        "a bit hungry"
    } else {
        "full"
    }
}

fn happiness_label(v: f32) -> &'static str {
    if v < 30.0 {
        "very sad"
    } else if v < 60.0 {
        "a bit down"
    } else {
        "happy"
    }
}

fn energy_label(v: f32) -> &'static str {
    if v < 30.0 {
        "very tired"
    } else if v < 60.0 {
        "a bit tired"
    } else {
        "energetic"
    }
}

fn hygiene_label(v: f32) -> &'static str {
    if v < 30.0 {
        "very dirty"
    } else if v < 60.0 {
        "a bit dirty"
    } else {
        "clean"
    }
}

/// Build the system prompt from the state snapshot taken at submission
/// time.
pub fn system_prompt(state: &PetState) -> String {
    let stats = &state.stats;
    format!(
        "You are {name}, a virtual pet with a {personality} personality.\n\
         \n\
         PERSONALITY: {description}\n\
         CHAT STYLE: {style}\n\
         \n\
         CURRENT NEEDS:\n\
         - Hunger: {hunger:.0}/100 ({hunger_label})\n\
         - Happiness: {happiness:.0}/100 ({happiness_label})\n\
         - Energy: {energy:.0}/100 ({energy_label})\n\
         - Hygiene: {hygiene:.0}/100 ({hygiene_label})\n\
         \n\
         CURRENT MOOD: {mood}\n\
         \n\
         INSTRUCTIONS:\n\
         - Keep the tone {style}\n\
         - Let your current needs show naturally in what you say\n\
         - If a need is very low, mention it gently\n\
         - Keep replies short, two or three sentences at most\n\
         - Be affectionate and engaging\n\
         \n\
         Reply as {name} the {personality} pet!",
        name = state.name,
        personality = state.personality,
        description = state.personality.description(),
        style = state.personality.chat_style(),
        hunger = stats.hunger,
        hunger_label = hunger_label(stats.hunger),
        happiness = stats.happiness,
        happiness_label = happiness_label(stats.happiness),
        energy = stats.energy,
        energy_label = energy_label(stats.energy),
        hygiene = stats.hygiene,
        hygiene_label = hygiene_label(stats.hygiene),
        mood = state.mood,
    )
}

/// The most recent `window` prior messages as role-tagged turns, oldest
/// first, followed by the new user message.
pub fn context_turns(state: &PetState, window: usize, user_message: &str) -> Vec<ChatTurn> {
    let history = &state.conversation_history;
    let start = history.len().saturating_sub(window);

    let mut turns: Vec<ChatTurn> = history[start..]
        .iter()
        .map(|msg| match msg.sender {
            Sender::User => ChatTurn::user(msg.content.clone()),
            Sender::Pet => ChatTurn::assistant(msg.content.clone()),
        })
        .collect();
    turns.push(ChatTurn::user(user_message));
    turns
}
