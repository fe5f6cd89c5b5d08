//! Seeker AI-coach conversation state.
//!
//! The "assistant" is canned: each accepted user message is answered by one
//! of a fixed set of follow-up questions after [`REPLY_DELAY_MS`].

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use time::OffsetDateTime;

use crate::data::types::{Message, Speaker};

/// Delay before the canned reply is appended.
pub const REPLY_DELAY_MS: u32 = 1500;

pub const CANNED_REPLIES: [&str; 5] = [
    "That's a great example! Now, what was the specific impact or result of this action?",
    "Excellent! Could you tell me more about the challenges you faced while implementing this?",
    "That sounds impressive! What skills did you use or develop during this experience?",
    "Perfect! How did this accomplishment align with your team's or company's goals?",
    "That's a fantastic story! What feedback did you receive from stakeholders?",
];

/// Conversation starters offered under the composer.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Tell me about a time you led a project",
    "Describe a challenge you overcame",
    "Share an example of innovation",
    "Talk about teamwork experience",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
}

impl ChatState {
    #[must_use]
    pub fn new(history: Vec<Message>) -> Self {
        Self { messages: history }
    }

    /// Append a user message. Blank input is ignored and returns `None`.
    pub fn send(&mut self, input: &str, now: OffsetDateTime) -> Option<&Message> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            speaker: Speaker::User,
            content: content.to_owned(),
            timestamp: now,
        });
        self.messages.last()
    }

    /// Append the assistant reply chosen by `seed`.
    pub fn reply(&mut self, seed: u128, now: OffsetDateTime) {
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            speaker: Speaker::Assistant,
            content: canned_reply(seed).to_owned(),
            timestamp: now,
        });
    }
}

/// Pick a canned reply; `seed` is typically random bits.
#[must_use]
pub fn canned_reply(seed: u128) -> &'static str {
    // Array length is a small constant.
    #[allow(clippy::cast_possible_truncation)]
    let index = (seed % CANNED_REPLIES.len() as u128) as usize;
    CANNED_REPLIES[index]
}

/// Fresh random bits for [`ChatState::reply`].
#[must_use]
pub fn random_seed() -> u128 {
    uuid::Uuid::new_v4().as_u128()
}
