//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request a token to be appended to the buffer
    AppendRequested { token: String },

    /// Request removal of the last buffer character
    DeleteLastRequested,

    /// Request the buffer to be emptied
    ClearRequested,

    /// Request evaluation of the buffer
    EvaluateRequested,

    /// Request the pending notification to be acknowledged
    NotificationDismissRequested,

    /// Request to quit application
    QuitRequested,
}

impl CommandEvent {
    /// Create an append event
    pub fn append<S: Into<String>>(token: S) -> Self {
        Self::AppendRequested {
            token: token.into(),
        }
    }
}
