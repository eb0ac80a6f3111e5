use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthCheck;
use crate::AppState;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        model: state.chat_service.model().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
