//! # Models
//!
//! Plain state owned by the view model: the expression buffer and the
//! pending notification.

pub mod expression_buffer;
pub mod notification;

pub use expression_buffer::ExpressionBuffer;
pub use notification::{Notification, INVALID_EXPRESSION_MESSAGE};
