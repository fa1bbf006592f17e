pub mod health;
pub mod mindmaps;
pub mod projects;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints
#[derive(Debug, Serialize, ToSchema)]
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
