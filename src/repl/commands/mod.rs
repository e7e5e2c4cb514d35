//! # Command Implementations
//!
//! Key routing for the calculator. Each command is stateless: it decides
//! from a [`CommandContext`] snapshot whether a key concerns it and, if so,
//! returns [`CommandEvent`]s for the controller to apply.

pub mod app;
pub mod context;
pub mod editing;
pub mod evaluation;
pub mod events;
pub mod notification;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

pub use app::{AppTerminateCommand, EscapeQuitCommand};
pub use context::{CommandContext, ViewModelSnapshot};
pub use editing::{AppendTokenCommand, ClearCommand, DeleteLastCommand};
pub use evaluation::EvaluateCommand;
pub use events::CommandEvent;
pub use notification::AcknowledgeNotificationCommand;

/// A key binding and the events it produces
pub trait Command {
    /// Check whether this command handles `event` in the given state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
///
/// Commands are tried in registration order and the first relevant one wins.
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    fn register_default_commands(&mut self) {
        // Ctrl+C must win over both the alert and the clear key
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(AcknowledgeNotificationCommand));
        self.add_command(Box::new(EscapeQuitCommand));

        self.add_command(Box::new(AppendTokenCommand));
        self.add_command(Box::new(EvaluateCommand));
        self.add_command(Box::new(DeleteLastCommand));
        self.add_command(Box::new(ClearCommand));
    }

    fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Route a key event to the first relevant command.
    ///
    /// Release and repeat events, and keys no command claims, yield no events.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if event.kind != KeyEventKind::Press {
            return Ok(Vec::new());
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} routed to {}", event.code, command.name());
                return command.execute(event, context);
            }
        }

        tracing::debug!("Key {:?} ignored", event.code);
        Ok(Vec::new())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
