//! Acknowledgment bodies shared by mutating endpoints.

use serde::Serialize;

/// `{"message": "..."}` acknowledgment.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        MessageResponse { message }
    }
}
