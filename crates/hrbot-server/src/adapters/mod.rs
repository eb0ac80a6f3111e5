//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod ollama;

// Re-exports
pub use ollama::OllamaClient;
