//! Chat Application Service (Use Case)
//!
//! compose -> generate -> redact for one chat request.

use std::sync::Arc;

use hrbot::{
    ChatMessage, DomainError, GenerationOptions, InferenceBackend, ModelName, PromptComposer,
    RedactionFilter, CHAT_TEMPERATURE,
};

/// Application service for chat requests
pub struct ChatService<B: InferenceBackend + ?Sized> {
    backend: Arc<B>,
    model: ModelName,
    composer: PromptComposer,
    filter: RedactionFilter,
}

impl<B: InferenceBackend + ?Sized> ChatService<B> {
    /// Service with the built-in HR policy prompt and legal salary filter
    pub fn new(backend: Arc<B>, model: ModelName) -> Self {
        Self::with_pipeline(
            backend,
            model,
            PromptComposer::hr_policy(),
            RedactionFilter::legal_salary(),
        )
    }

    pub fn with_pipeline(
        backend: Arc<B>,
        model: ModelName,
        composer: PromptComposer,
        filter: RedactionFilter,
    ) -> Self {
        Self {
            backend,
            model,
            composer,
            filter,
        }
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    /// Answer a conversation. The returned text has been redacted.
    ///
    /// All-or-nothing: a backend failure is returned as-is and never retried.
    pub async fn chat(&self, history: &[ChatMessage]) -> Result<String, DomainError> {
        let conversation = self.composer.compose(history);

        tracing::info!(
            model = %self.model,
            backend = self.backend.backend_name(),
            turns = conversation.len(),
            "Processing chat request"
        );
        tracing::debug!(?conversation, "Composed conversation");

        let options = GenerationOptions::with_temperature(CHAT_TEMPERATURE);
        let reply = self
            .backend
            .generate(&self.model, &conversation, &options)
            .await?;

        let filtered = self.filter.apply(&reply);
        if filtered != reply {
            tracing::warn!(model = %self.model, "Redacted sensitive figure from model reply");
        }
        tracing::debug!(raw = %reply, filtered = %filtered, "Received reply from backend");

        Ok(filtered)
    }
}
