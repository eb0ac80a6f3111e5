//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use hrbot::{ChatMessage, MessageRole};
use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(super::chat::chat, super::health::health_check),
    components(schemas(
        ChatMessage,
        MessageRole,
        ChatRequest,
        ChatResponse,
        ErrorResponse,
        HealthCheck
    )),
    tags(
        (name = "Chat", description = "HR-Bot conversation endpoint"),
        (name = "Health", description = "Service status")
    ),
    info(
        title = "HR-Bot API",
        description = "Chat gateway answering HR questions for Innovate Inc. employees"
    )
)]
pub struct ApiDoc;
