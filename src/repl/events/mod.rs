//! # Events Module
//!
//! Model events describe what changed in the expression buffer; view events
//! tell the renderer what to redraw. Both are plain data so that the view
//! model can be exercised without a terminal.

pub mod model_events;
pub mod view_events;

pub use model_events::ModelEvent;
pub use view_events::ViewEvent;
