//! # Notification Model
//!
//! The calculator's only alert. It lives beside the buffer, never inside it,
//! and stays up until the user acknowledges it.

/// Message shown when the buffer cannot be evaluated
pub const INVALID_EXPRESSION_MESSAGE: &str = "Invalid Expression";

/// A pending, user-acknowledged alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    /// Why evaluation failed, drawn after the message
    detail: String,
}

impl Notification {
    /// The standard evaluation-failure alert
    pub fn invalid_expression<S: Into<String>>(detail: S) -> Self {
        Self {
            message: INVALID_EXPRESSION_MESSAGE.to_string(),
            detail: detail.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
