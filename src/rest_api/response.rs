//! # Response Formatting
//!
//! Standard response types for the book API. Successful record bodies
//! serialize the record directly; everything else is a message body.

use serde::{Deserialize, Serialize};

/// Plain `{"message": "..."}` body, used for deletions and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
