//! # Expression Buffer Model
//!
//! The calculator's input text. Mutations never validate; every mutation
//! reports what happened as a [`ModelEvent`].

use crate::repl::events::ModelEvent;

/// Mutable text holding the in-progress expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    content: String,
}

impl ExpressionBuffer {
    /// Create new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer text
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of characters (not bytes) in the buffer
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Append `token` verbatim
    pub fn append(&mut self, token: &str) -> ModelEvent {
        self.content.push_str(token);
        ModelEvent::TokenAppended {
            token: token.to_string(),
        }
    }

    /// Remove the last character, if any
    pub fn delete_last(&mut self) -> ModelEvent {
        let removed = self.content.pop();
        ModelEvent::LastCharDeleted { removed }
    }

    /// Empty the buffer
    pub fn clear(&mut self) -> ModelEvent {
        self.content.clear();
        ModelEvent::Cleared
    }

    /// Replace the whole buffer, typically with an evaluation result
    pub fn replace(&mut self, text: String) -> ModelEvent {
        let previous = std::mem::replace(&mut self.content, text);
        ModelEvent::Replaced {
            previous,
            current: self.content.clone(),
        }
    }
}
