//! # View Events
//!
//! Events related to view updates and user input.
//! These events drive UI refreshing.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (startup, terminal resize)
    FullRedrawRequired,

    /// The display field must show the new buffer content
    DisplayUpdated,

    /// An alert was raised and must be drawn
    NotificationRaised,

    /// The alert was acknowledged and must be erased
    NotificationDismissed,
}
