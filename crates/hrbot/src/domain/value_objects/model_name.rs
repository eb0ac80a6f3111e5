//! Model Name - Identifier of a model in the inference backend's local store

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Model used when `OLLAMA_MODEL` is not set
pub const DEFAULT_MODEL: &str = "qwen:1.8b";

/// Tag implied by the backend when a name has none
const DEFAULT_TAG: &str = "latest";

/// Model identifier, e.g. `qwen:1.8b` or `llama3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Model name must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with the implicit `:latest` tag spelled out.
    ///
    /// Only the last path segment is inspected so that registry hosts with a
    /// port (`host:5000/model`) are not mistaken for a tag.
    pub fn qualified(&self) -> String {
        let last_segment = self.0.rsplit('/').next().unwrap_or(&self.0);
        if last_segment.contains(':') {
            self.0.clone()
        } else {
            format!("{}:{}", self.0, DEFAULT_TAG)
        }
    }

    /// Whether a name reported by the backend refers to this model
    pub fn matches(&self, listed: &str) -> bool {
        match ModelName::new(listed) {
            Ok(other) => other.qualified() == self.qualified(),
            Err(_) => false,
        }
    }
}

impl Default for ModelName {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModelName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelName::new(s)
    }
}

impl TryFrom<String> for ModelName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ModelName::new(value)
    }
}

impl From<ModelName> for String {
    fn from(value: ModelName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(ModelName::default().as_str(), "qwen:1.8b");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(ModelName::new("   ").is_err());
        assert!("".parse::<ModelName>().is_err());
    }

    #[test]
    fn test_qualified_adds_latest_tag() {
        assert_eq!(ModelName::new("llama3").unwrap().qualified(), "llama3:latest");
        assert_eq!(ModelName::new("qwen:1.8b").unwrap().qualified(), "qwen:1.8b");
        assert_eq!(
            ModelName::new("registry.local:5000/team/model").unwrap().qualified(),
            "registry.local:5000/team/model:latest"
        );
    }

    #[test]
    fn test_matches_listed_names() {
        let model = ModelName::new("llama3").unwrap();
        assert!(model.matches("llama3:latest"));
        assert!(model.matches("llama3"));
        assert!(!model.matches("llama3:8b"));
        assert!(!model.matches(""));
    }
}
