//! # Notification Commands
//!
//! While an alert is up, the next key only acknowledges it.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{Command, CommandContext, CommandEvent};

/// Dismiss the pending alert with any key
pub struct AcknowledgeNotificationCommand;

impl Command for AcknowledgeNotificationCommand {
    fn is_relevant(&self, context: &CommandContext, _event: &KeyEvent) -> bool {
        context.state.notification_pending
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::NotificationDismissRequested])
    }

    fn name(&self) -> &'static str {
        "AcknowledgeNotification"
    }
}
