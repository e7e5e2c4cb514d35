//! # Buffer Operations
//!
//! The calculator operations: append, delete-last, clear and evaluate.

use crate::calculator::evaluate_to_string;
use crate::repl::view_models::ViewModel;

impl ViewModel {
    /// Append a digit/operator token verbatim
    pub fn append(&mut self, token: &str) {
        let event = self.buffer.append(token);
        self.handle_model_event(event);
    }

    /// Append a function token verbatim.
    ///
    /// Behaves exactly like [`ViewModel::append`]; the evaluator decides later
    /// whether the text is acceptable.
    pub fn append_function(&mut self, token: &str) {
        self.append(token);
    }

    /// Remove the last character; no-op on an empty buffer
    pub fn delete_last(&mut self) {
        let event = self.buffer.delete_last();
        self.handle_model_event(event);
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        let event = self.buffer.clear();
        self.handle_model_event(event);
    }

    /// Evaluate the buffer in place.
    ///
    /// On success the buffer holds the formatted result and `true` is
    /// returned. On failure the buffer is untouched, an "Invalid Expression"
    /// alert is raised and `false` is returned.
    pub fn evaluate(&mut self) -> bool {
        match evaluate_to_string(self.buffer.content(), self.settings.precision) {
            Ok(result) => {
                tracing::debug!("Evaluated '{}' to '{}'", self.buffer.content(), result);
                let event = self.buffer.replace(result);
                self.handle_model_event(event);
                true
            }
            Err(err) => {
                tracing::debug!("Evaluation of '{}' failed: {}", self.buffer.content(), err);
                self.raise_invalid_expression(&err);
                false
            }
        }
    }
}
