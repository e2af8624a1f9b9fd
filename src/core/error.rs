//! Error types and handling for the agent server.
//!
//! Only startup can fail with this type. Transports report their own
//! `TransportError`, and per-query failures are folded into text by the router.

use thiserror::Error;

/// A specialized Result type for agent server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the agent server.
///
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the language-model backend.
    #[error("Backend error: {0}")]
    Llm(#[from] super::llm::LlmError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::llm::LlmError;

    #[test]
    fn test_backend_error_converts() {
        let err: Error = LlmError::MissingApiKey {
            env_var: "GROQ_API_KEY".into(),
        }
        .into();
        assert!(matches!(err, Error::Llm(_)));
        assert!(err.to_string().starts_with("Backend error: Missing API key"));
    }

    #[test]
    fn test_config_helper() {
        let err = Error::config("missing model");
        assert!(matches!(err, Error::Config(ref m) if m == "missing model"));
    }
}
