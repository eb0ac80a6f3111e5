//! Inference Backend Port
//!
//! Abstract interface for the model runtime that produces chat completions.
//! The production implementation talks to a local Ollama instance.

use async_trait::async_trait;

use crate::domain::entities::ChatMessage;
use crate::domain::errors::BackendError;
use crate::domain::value_objects::{GenerationOptions, ModelName};

/// Chat completion backend
///
/// # Example
///
/// ```rust,ignore
/// use hrbot::ports::InferenceBackend;
///
/// struct OllamaClient { /* ... */ }
///
/// #[async_trait]
/// impl InferenceBackend for OllamaClient {
///     async fn generate(&self, model: &ModelName, conversation: &[ChatMessage],
///         options: &GenerationOptions) -> Result<String, BackendError> {
///         // POST /api/chat
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Generate the complete reply text for a conversation.
    ///
    /// Blocks until the whole reply is available; no streaming.
    async fn generate(
        &self,
        model: &ModelName,
        conversation: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<String, BackendError>;

    /// Make sure `model` is present in the backend's local store, fetching it
    /// if absent. Called once at startup.
    async fn ensure_model(&self, model: &ModelName) -> Result<(), BackendError>;

    /// Backend name for logs (e.g. "ollama")
    fn backend_name(&self) -> &str;
}
