//! Shared fixtures for unit tests

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hrbot::{BackendError, ChatMessage, GenerationOptions, InferenceBackend, ModelName};

use crate::application::ChatService;
use crate::AppState;

/// A recorded `generate` call
pub type RecordedCall = (String, Vec<ChatMessage>, GenerationOptions);

/// Backend returning a fixed reply and recording what it was sent
pub struct StubBackend {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl StubBackend {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Fails every call with `BackendError::Unreachable(message)`
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceBackend for StubBackend {
    async fn generate(
        &self,
        model: &ModelName,
        conversation: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<String, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), conversation.to_vec(), *options));
        self.reply.clone().map_err(BackendError::Unreachable)
    }

    async fn ensure_model(&self, _model: &ModelName) -> Result<(), BackendError> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "stub"
    }
}

/// App state wired to `backend`, serving files from `site_dir`
pub fn app_state(backend: Arc<StubBackend>, site_dir: impl Into<PathBuf>) -> AppState {
    let backend: Arc<dyn InferenceBackend> = backend;
    AppState {
        chat_service: Arc::new(ChatService::new(backend, ModelName::default())),
        site_dir: site_dir.into(),
    }
}
