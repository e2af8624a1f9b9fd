//! Configuration management for the agent server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used by the summarizer and generic answer tools.
pub const DEFAULT_LLM_MODEL: &str = "llama3-8b-8192";

/// Main configuration structure for the agent server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Language-model backend settings.
    pub llm: LlmConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Settings for the chat-completions backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier sent with every completion request.
    pub model: String,

    /// API root; `/chat/completions` is appended.
    pub base_url: String,

    /// Sampling temperature. Zero keeps answers deterministic.
    pub temperature: f32,

    /// Optional cap on generated tokens.
    pub max_tokens: Option<u32>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Groq API key for the language-model backend.
    pub groq_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "groq_api_key",
                &self.groq_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_LLM_MODEL.to_string(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "multi-tool-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            llm: LlmConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `AGENT_`, for example `AGENT_SERVER_NAME`
    /// or `AGENT_LOG_LEVEL`. The backend key keeps its provider name,
    /// `GROQ_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("AGENT_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("AGENT_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(flag) = std::env::var("AGENT_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = flag.to_lowercase() != "false" && flag != "0";
        }

        config.transport = TransportConfig::from_env();

        if let Ok(model) = std::env::var("AGENT_LLM_MODEL") {
            config.llm.model = model;
        }

        if let Ok(base_url) = std::env::var("AGENT_LLM_BASE_URL") {
            config.llm.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("AGENT_LLM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.llm.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid AGENT_LLM_TIMEOUT_SECS: {}", timeout),
            }
        }

        if let Ok(max_tokens) = std::env::var("AGENT_LLM_MAX_TOKENS") {
            config.llm.max_tokens = max_tokens.parse().ok();
        }

        match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                config.credentials.groq_api_key = Some(key);
                info!("Groq API key loaded from environment");
            }
            _ => {
                warn!(
                    "GROQ_API_KEY not set - summarizer and generic answer tools \
                     will report a missing key until it is configured"
                );
            }
        }

        config
    }

    /// Check the values that cannot be repaired with a default.
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("LLM model must not be empty"));
        }
        if self.llm.base_url.trim().is_empty() {
            return Err(Error::config("LLM base URL must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("LLM timeout must be at least one second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GROQ_API_KEY", "gsk_test_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.groq_api_key.as_deref(),
            Some("gsk_test_12345")
        );
        unsafe {
            std::env::remove_var("GROQ_API_KEY");
        }
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GROQ_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.credentials.groq_api_key.is_none());
        unsafe {
            std::env::remove_var("GROQ_API_KEY");
        }
    }

    #[test]
    fn test_llm_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("AGENT_LLM_MODEL", "llama-3.1-8b-instant");
            std::env::set_var("AGENT_LLM_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.timeout_secs, 15);
        assert_eq!(config.llm.temperature, 0.0);
        unsafe {
            std::env::remove_var("AGENT_LLM_MODEL");
            std::env::remove_var("AGENT_LLM_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            groq_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_llm_settings() {
        let config = Config::default();
        assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
        assert_eq!(config.llm.temperature, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.llm.model = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
