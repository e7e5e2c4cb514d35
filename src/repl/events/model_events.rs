//! # Model Events
//!
//! Emitted by the expression buffer whenever its content changes.

/// Semantic description of a buffer mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// Text was appended at the end of the buffer
    TokenAppended { token: String },

    /// The last character was removed (`None` when the buffer was already empty)
    LastCharDeleted { removed: Option<char> },

    /// The buffer was emptied
    Cleared,

    /// The buffer was replaced wholesale by an evaluation result
    Replaced { previous: String, current: String },
}

impl ModelEvent {
    /// Whether the event changed what the display shows
    pub fn changes_content(&self) -> bool {
        match self {
            ModelEvent::TokenAppended { token } => !token.is_empty(),
            ModelEvent::LastCharDeleted { removed } => removed.is_some(),
            ModelEvent::Cleared => true,
            ModelEvent::Replaced { previous, current } => previous != current,
        }
    }
}
