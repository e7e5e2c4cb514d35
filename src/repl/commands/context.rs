//! # Command Context
//!
//! Read-only view of the state commands need to decide relevance.

use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub content: String,
    pub notification_pending: bool,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            content: view_model.content().to_string(),
            notification_pending: view_model.notification().is_some(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}
