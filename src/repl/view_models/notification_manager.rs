//! # Notification Management
//!
//! Raising and acknowledging the calculator alert.

use crate::calculator::EvaluationError;
use crate::repl::events::ViewEvent;
use crate::repl::models::Notification;
use crate::repl::view_models::ViewModel;

impl ViewModel {
    pub(super) fn raise_invalid_expression(&mut self, error: &EvaluationError) {
        self.raise_notification(Notification::invalid_expression(error.to_string()));
    }

    /// Show an alert; a pending one is replaced
    fn raise_notification(&mut self, notification: Notification) {
        tracing::info!("Alert raised: {}", notification.message());
        self.notification = Some(notification);
        self.emit_view_event(ViewEvent::NotificationRaised);
    }

    /// Acknowledge the pending alert, if any
    pub fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            tracing::debug!("Alert acknowledged");
            self.emit_view_event(ViewEvent::NotificationDismissed);
        }
    }
}
