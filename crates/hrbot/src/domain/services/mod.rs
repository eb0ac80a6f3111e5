//! Domain Services
//!
//! Stateless transformations applied around every inference call.

mod prompt_composer;
mod redaction;

pub use prompt_composer::*;
pub use redaction::*;
