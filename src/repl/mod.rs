//! # Interactive Calculator
//!
//! MVVM implementation of the terminal calculator:
//!
//! - **models**: the expression buffer and the pending alert
//! - **view_models**: the expression buffer controller
//! - **commands**: key routing
//! - **views**: terminal rendering
//! - **controllers**: the event loop
//! - **io**: terminal and mock input/output streams

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::{ModelEvent, ViewEvent};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};

pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
pub use models::{ExpressionBuffer, Notification};
