//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! domain services and the inference backend.

mod chat_service;

pub use chat_service::ChatService;
