//! # ViewModel Module
//!
//! The view model is the expression buffer controller: it owns the buffer
//! and the pending alert, exposes the calculator operations, and queues
//! view events for the renderer.

mod buffer_operations;
mod core;
mod notification_manager;

pub use self::core::ViewModel;

#[cfg(test)]
mod tests;
