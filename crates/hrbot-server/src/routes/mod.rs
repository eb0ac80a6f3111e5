//! HR-Bot API Routes
//!
//! - /api/chat - Policy-augmented chat with reply redaction
//! - / - Chat page (`index.html`)
//! - /static/* - Page assets
//! - /health - Liveness probe
//! - /swagger-ui - OpenAPI documentation

pub mod chat;
pub mod health;
pub mod site;
pub mod swagger;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();
    let site_dir = state.site_dir.clone();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(health::router())
        .merge(chat::router())
        .merge(site::router(&site_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
