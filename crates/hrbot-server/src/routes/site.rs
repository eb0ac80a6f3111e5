//! Site Routes - Chat page and static assets

use std::io::ErrorKind;
use std::path::Path;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

pub const INDEX_NOT_FOUND_HTML: &str = "<h1>Error: index.html not found</h1>";

/// Serve `index.html` from the site directory
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.site_dir.join("index.html");

    match tokio::fs::read(&path).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} not found", path.display());
            (StatusCode::NOT_FOUND, Html(INDEX_NOT_FOUND_HTML)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Error: index.html could not be read</h1>"),
            )
                .into_response()
        }
    }
}

/// `/` plus `/static/*` served from `{site_dir}/static`
pub fn router(site_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(site_dir.join("static")))
}
