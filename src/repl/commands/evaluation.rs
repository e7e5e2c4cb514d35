//! # Evaluation Command

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Evaluate the buffer (Enter)
pub struct EvaluateCommand;

impl Command for EvaluateCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter) && !context.state.notification_pending
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::EvaluateRequested])
    }

    fn name(&self) -> &'static str {
        "Evaluate"
    }
}
