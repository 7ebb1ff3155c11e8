//! Validation error type carrying per-field messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field-keyed validation errors.
///
/// Serializes as `{"field": ["message", ...]}` so clients can surface
/// every problem in one round trip. No partial acceptance: any entry
/// here means the whole input is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field. A field may accumulate
    /// multiple messages.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "validation failed for fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}
