//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! Operations are implemented in sibling modules as further `impl ViewModel`
//! blocks.

use crate::config::CalcSettings;
use crate::repl::commands::CommandEvent;
use crate::repl::events::{ModelEvent, ViewEvent};
use crate::repl::models::{ExpressionBuffer, Notification};

/// Owner of the expression buffer and the pending alert
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub(super) buffer: ExpressionBuffer,
    pub(super) notification: Option<Notification>,
    pub(super) settings: CalcSettings,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a view model with default settings and an empty buffer
    pub fn new() -> Self {
        Self::with_settings(CalcSettings::default())
    }

    pub fn with_settings(settings: CalcSettings) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            notification: None,
            settings,
            pending_view_events: Vec::new(),
        }
    }

    /// Current buffer text, the only read access the view layer gets
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// Pending alert, if any
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn settings(&self) -> &CalcSettings {
        &self.settings
    }

    /// Ask for the whole screen to be drawn again, e.g. after a resize
    pub fn request_redraw(&mut self) {
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Apply a routed command event.
    ///
    /// `QuitRequested` is the controller's concern and is ignored here.
    pub fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::AppendRequested { token } => self.append(&token),
            CommandEvent::DeleteLastRequested => self.delete_last(),
            CommandEvent::ClearRequested => self.clear(),
            CommandEvent::EvaluateRequested => {
                self.evaluate();
            }
            CommandEvent::NotificationDismissRequested => self.dismiss_notification(),
            CommandEvent::QuitRequested => {}
        }
    }

    /// Drain view events queued since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
    }

    /// Translate a buffer mutation into display work
    pub(super) fn handle_model_event(&mut self, event: ModelEvent) {
        tracing::debug!("Buffer event: {:?}", event);
        if event.changes_content() {
            self.emit_view_event(ViewEvent::DisplayUpdated);
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
