//! # Text Editing Commands
//!
//! Commands that grow, shrink or empty the expression buffer.

use crate::calculator::is_arithmetic_key;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

fn has_command_modifier(event: &KeyEvent) -> bool {
    event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Append a digit, operator, parenthesis or decimal point
pub struct AppendTokenCommand;

impl Command for AppendTokenCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char(ch) => {
                !context.state.notification_pending
                    && !has_command_modifier(event)
                    && is_arithmetic_key(ch)
            }
            _ => false,
        }
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if let KeyCode::Char(ch) = event.code {
            Ok(vec![CommandEvent::append(ch.to_string())])
        } else {
            Ok(vec![])
        }
    }

    fn name(&self) -> &'static str {
        "AppendToken"
    }
}

/// Delete the last character (Backspace)
pub struct DeleteLastCommand;

impl Command for DeleteLastCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Backspace) && !context.state.notification_pending
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DeleteLastRequested])
    }

    fn name(&self) -> &'static str {
        "DeleteLast"
    }
}

/// Clear the buffer (`c` or `C`)
pub struct ClearCommand;

impl Command for ClearCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char(ch) => {
                ch.eq_ignore_ascii_case(&'c')
                    && !has_command_modifier(event)
                    && !context.state.notification_pending
            }
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ClearRequested])
    }

    fn name(&self) -> &'static str {
        "Clear"
    }
}
