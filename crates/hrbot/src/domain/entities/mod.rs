//! Domain Entities
//!
//! - ChatMessage: One turn of a conversation (role + content)

mod message;

pub use message::*;
