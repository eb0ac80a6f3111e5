//! HR-Bot API Models
//!
//! - Chat: conversation in, redacted reply out
//! - Health: liveness probe

mod chat;
mod health;

pub use chat::*;
pub use health::*;
