//! # calcline - Keyboard-Driven Terminal Calculator
//!
//! A single-line calculator: keys build an arithmetic expression in a
//! buffer, Enter evaluates it in place, bad input raises an alert and leaves
//! the buffer alone for correction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Buffer ops │              │ - Buffer│
//! │ - Rendering │              │ - Evaluation │              │ - Alert │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Key        │
//!                               │   routing    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! Evaluation lives in [`calculator`], a small recursive-descent evaluator
//! restricted to `+ - * / ( )`, unary signs and decimal numbers.

pub mod calculator;
pub mod cmd_args;
pub mod config;
pub mod one_shot;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
