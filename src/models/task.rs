//! Task model

use serde::Serialize;
use std::fmt;

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub complete: bool,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            complete: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.complete = !self.complete;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.complete { 'x' } else { ' ' };
        write!(f, "[{}] #{} {}", mark, self.id, self.text)
    }
}
