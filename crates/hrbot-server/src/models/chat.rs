//! Chat - Request/Response DTOs for `/api/chat`

use hrbot::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message shown to clients whenever the backend call fails
pub const CHAT_FAILURE_MESSAGE: &str = "Failed to get a response from the AI model.";

/// Conversation history from the client, oldest turn first
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Redacted model reply
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

/// Generic error envelope
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn chat_failure() -> Self {
        Self {
            error: CHAT_FAILURE_MESSAGE.to_string(),
        }
    }
}
