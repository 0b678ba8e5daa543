//! Message log
//!
//! Short descriptions of what just happened, newest last.

use std::collections::VecDeque;

/// Messages kept before the oldest is dropped
pub const MAX_MESSAGES: usize = 50;

/// A message to display on the HUD
#[derive(Debug, Clone, PartialEq)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Loot,
    Travel,
    System,
}

/// Bounded message log
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: VecDeque<GameMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message, dropping the oldest once full
    pub fn push(&mut self, text: impl Into<String>, category: MessageCategory) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(GameMessage {
            text: text.into(),
            category,
        });
    }

    /// Most recent message
    pub fn latest(&self) -> Option<&GameMessage> {
        self.messages.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
