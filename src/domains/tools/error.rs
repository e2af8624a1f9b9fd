//! Tool-specific error types.

use thiserror::Error;

use crate::core::llm::LlmError;
use crate::domains::prompts::PromptError;

/// Errors a tool can raise from `invoke`.
///
/// The query router catches every variant and turns it into text.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The calculator could not evaluate its input.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// The language-model backend failed.
    #[error(transparent)]
    Backend(#[from] LlmError),

    /// The tool's prompt could not be rendered.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl ToolError {
    /// Create a new "calculation" error.
    pub fn calculation(msg: impl Into<String>) -> Self {
        Self::Calculation(msg.into())
    }
}
