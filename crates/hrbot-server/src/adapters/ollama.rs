//! Ollama Inference Backend
//!
//! Talks to a local Ollama runtime over its HTTP API using reqwest.
//! - `POST /api/chat` - non-streaming chat completion
//! - `GET /api/tags` - locally available models
//! - `POST /api/pull` - fetch a missing model

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use hrbot::{BackendError, ChatMessage, GenerationOptions, InferenceBackend, ModelName};

/// Pulling a model downloads gigabytes; give it far longer than a chat call.
const PULL_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Ollama implementation of InferenceBackend
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    options: ChatOptions,
    stream: bool,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<LocalModel>,
}

#[derive(Deserialize)]
struct LocalModel {
    name: String,
}

#[derive(Serialize)]
struct PullRequest<'a> {
    model: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct PullResponse {
    status: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hrbot-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Unreachable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        let response = self
            .client
            .get(self.url("/api/tags"))
            .send()
            .await
            .map_err(transport_error)?;

        let tags: TagsResponse = read_json(response).await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn pull(&self, model: &ModelName) -> Result<(), BackendError> {
        let request = PullRequest {
            model: model.as_str(),
            stream: false,
        };

        let response = self
            .client
            .post(self.url("/api/pull"))
            .timeout(PULL_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let pulled: PullResponse = read_json(response)
            .await
            .map_err(|e| BackendError::pull_failed(model.as_str(), e.to_string()))?;

        if pulled.status != "success" {
            return Err(BackendError::pull_failed(
                model.as_str(),
                format!("unexpected status '{}'", pulled.status),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(
        &self,
        model: &ModelName,
        conversation: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages: conversation,
            options: ChatOptions {
                temperature: options.temperature,
            },
            stream: false,
        };

        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let chat: ChatResponse = read_json(response).await?;
        Ok(chat.message.content)
    }

    async fn ensure_model(&self, model: &ModelName) -> Result<(), BackendError> {
        let available = self.list_models().await?;

        if available.iter().any(|name| model.matches(name)) {
            tracing::info!("Model {} already present in Ollama", model);
            return Ok(());
        }

        tracing::info!("Model {} not found locally, pulling...", model);
        self.pull(model).await?;
        tracing::info!("Model {} pulled", model);

        Ok(())
    }

    fn backend_name(&self) -> &str {
        "ollama"
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout(e.to_string())
    } else {
        BackendError::Unreachable(e.to_string())
    }
}

/// Decode a success body, or turn an error status into `BackendError::Status`
/// carrying Ollama's `{"error": ...}` message when present.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        return Err(BackendError::status(status.as_u16(), message));
    }

    serde_json::from_str(&body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
}
