//! HR-Bot Domain Library
//!
//! Core domain types and interfaces for the HR-Bot chat gateway.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Conversation turns (ChatMessage, MessageRole)
//!   - `value_objects/`: Immutable value types (ModelName, GenerationOptions)
//!   - `services/`: Prompt composition and reply redaction
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Inference backend interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use hrbot::{ChatMessage, PromptComposer, RedactionFilter};
//!
//! let conversation = PromptComposer::hr_policy().compose(&history);
//! let reply = backend.generate(&model, &conversation, &options).await?;
//! let safe = RedactionFilter::default().apply(&reply);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compose, redact, BackendError, ChatMessage, DomainError, GenerationOptions, MessageRole,
    ModelName, PromptComposer, RedactionFilter, CHAT_TEMPERATURE, DEFAULT_MODEL, HR_POLICY_PROMPT,
    REDACTION_PLACEHOLDER, SENSITIVE_FIGURE,
};
pub use ports::InferenceBackend;
