use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use hrbot::InferenceBackend;
use tokio::net::TcpListener;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::OllamaClient;
use application::ChatService;
use config::Config;

/// Chat service over whichever backend was wired at startup
pub type AppChatService = ChatService<dyn InferenceBackend>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<AppChatService>,
    pub site_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrbot_server=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("HR-Bot API initializing...");

    let config = Config::from_env().context("Invalid configuration")?;
    let ollama = OllamaClient::new(&config.ollama_host, config.request_timeout)
        .context("Failed to create Ollama client")?;

    tracing::info!(
        "Using model {} via Ollama at {}",
        config.model,
        ollama.base_url()
    );

    ollama
        .ensure_model(&config.model)
        .await
        .with_context(|| format!("Failed to ensure model {} is available", config.model))?;

    tracing::info!("Model {} ready", config.model);

    let backend: Arc<dyn InferenceBackend> = Arc::new(ollama);
    let state = AppState {
        chat_service: Arc::new(ChatService::new(backend, config.model.clone())),
        site_dir: config.site_dir.clone(),
    };

    if !config.site_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {} - / will return 404",
            config.site_dir.display()
        );
    }

    let router = routes::app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("HR-Bot API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("HR-Bot API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
