//! Chat Routes - Policy-augmented, redacted LLM chat

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::Instrument;
use uuid::Uuid;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::AppState;

/// Answer a conversation as HR-Bot
///
/// Backend failures are logged server-side and surfaced only as a generic
/// error message.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Redacted model reply", body = ChatResponse),
        (status = 400, description = "Request body is not valid JSON"),
        (status = 415, description = "Missing `application/json` content type"),
        (status = 422, description = "Request body does not match ChatRequest"),
        (status = 500, description = "Inference backend failed", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    match state
        .chat_service
        .chat(&payload.messages)
        .instrument(span)
        .await
    {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            tracing::error!(
                %request_id,
                "An error occurred while communicating with the inference backend: {}",
                e
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::chat_failure()),
            ))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
