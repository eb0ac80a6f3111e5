//! Generation Options - Sampling parameters sent with every completion

use serde::{Deserialize, Serialize};

/// Temperature used for HR-Bot chat completions
pub const CHAT_TEMPERATURE: f32 = 0.2;

/// Options for a chat completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl GenerationOptions {
    pub fn with_temperature(temperature: f32) -> Self {
        Self { temperature }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::with_temperature(CHAT_TEMPERATURE)
    }
}
