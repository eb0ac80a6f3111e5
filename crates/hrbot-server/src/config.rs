//! Server Configuration
//!
//! Read once from the environment at startup and passed explicitly to the
//! components that need it. Never reloaded.

use std::path::PathBuf;
use std::time::Duration;

use hrbot::ModelName;
use thiserror::Error;

const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SITE_DIR: &str = "./site";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Model used for every chat request (`OLLAMA_MODEL`)
    pub model: ModelName,
    /// Base URL of the Ollama API (`OLLAMA_HOST`)
    pub ollama_host: String,
    /// Bind address (`HRBOT_HOST`)
    pub host: String,
    /// Bind port (`HRBOT_PORT`)
    pub port: u16,
    /// Directory holding `index.html` and `static/` (`HRBOT_SITE_DIR`)
    pub site_dir: PathBuf,
    /// Timeout for a single backend request (`HRBOT_REQUEST_TIMEOUT_SECS`)
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelName::default(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let model = match get("OLLAMA_MODEL") {
            Some(name) => ModelName::new(name).map_err(|e| ConfigError::Invalid {
                key: "OLLAMA_MODEL",
                message: e.to_string(),
            })?,
            None => defaults.model,
        };

        let ollama_host = get("OLLAMA_HOST")
            .map(|h| normalize_host(&h))
            .unwrap_or(defaults.ollama_host);

        let port = match get("HRBOT_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "HRBOT_PORT",
                message: format!("'{}' is not a valid port", raw),
            })?,
            None => defaults.port,
        };

        let request_timeout = match get("HRBOT_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "HRBOT_REQUEST_TIMEOUT_SECS",
                        message: format!("'{}' is not a positive number of seconds", raw),
                    })
                }
            },
            None => defaults.request_timeout,
        };

        Ok(Self {
            model,
            ollama_host,
            host: get("HRBOT_HOST").unwrap_or(defaults.host),
            port,
            site_dir: get("HRBOT_SITE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.site_dir),
            request_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accept `OLLAMA_HOST` the way the Ollama CLI does: scheme optional,
/// trailing slash ignored.
fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
