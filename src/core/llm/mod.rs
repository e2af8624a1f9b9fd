//! Language-model backend.
//!
//! The summarizer and generic answer tools only need one capability from the
//! model: turn a prompt into text. [`CompletionBackend`] is that seam.
//!
//! - `groq.rs` - OpenAI-compatible chat completions client (Groq)
//! - `scripted.rs` - canned backend used by tests

mod groq;
#[cfg(test)]
pub(crate) mod scripted;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::core::config::Config;

pub use groq::GroqClient;

/// Text completion capability used by LLM-backed tools.
///
/// Each call is independent; implementations hold no conversation state.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Complete a single prompt and return the model's text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Errors from the language-model backend.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Missing API key: environment variable {env_var} not set")]
    MissingApiKey { env_var: String },

    #[error("LLM HTTP error: {0}")]
    Http(String),

    #[error("LLM auth error: {0}")]
    Auth(String),

    #[error("LLM API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("LLM response parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Http(format!("request timed out: {}", e))
        } else {
            LlmError::Http(e.to_string())
        }
    }
}

/// Backend used when no API key is configured.
///
/// Keeps the server usable for the calculator and stub tools; LLM-backed
/// tools fail through the normal error path.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredBackend;

#[async_trait]
impl CompletionBackend for UnconfiguredBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::MissingApiKey {
            env_var: "GROQ_API_KEY".to_string(),
        })
    }
}

/// Build the backend described by the configuration.
pub fn build_backend(config: &Config) -> Result<Arc<dyn CompletionBackend>, LlmError> {
    match config.credentials.groq_api_key.as_deref() {
        Some(key) => Ok(Arc::new(GroqClient::new(key, &config.llm)?)),
        None => {
            warn!("No language-model credentials; LLM-backed tools are disabled");
            Ok(Arc::new(UnconfiguredBackend))
        }
    }
}
