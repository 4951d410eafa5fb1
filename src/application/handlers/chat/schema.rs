//! Input checks shared by the chat handlers.
//!
//! Every check runs and failures are collected, so one rejected request
//! reports all of its problems at once.

use crate::domain::chat::{ChatError, ValidationIssue};

#[derive(Debug, Default)]
pub(crate) struct Schema {
    issues: Vec<ValidationIssue>,
}

impl Schema {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Value must contain something other than whitespace.
    pub(crate) fn required(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.issues.push(ValidationIssue::new(field, message));
        }
        self
    }

    /// Value may hold at most `max` characters.
    pub(crate) fn max_chars(&mut self, field: &str, value: &str, max: usize, message: &str) -> &mut Self {
        if value.chars().count() > max {
            self.issues.push(ValidationIssue::new(field, message));
        }
        self
    }

    pub(crate) fn ensure(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.issues.push(ValidationIssue::new(field, message));
        }
        self
    }

    pub(crate) fn finish(&mut self, message: &str) -> Result<(), ChatError> {
        if self.issues.is_empty() {
            return Ok(());
        }
        Err(ChatError::validation(message, std::mem::take(&mut self.issues)))
    }
}
