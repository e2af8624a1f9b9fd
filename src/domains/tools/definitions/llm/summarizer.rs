//! Summarizer tool.
//!
//! Wraps the query in the business-summary prompt and returns the model's
//! answer verbatim.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::llm::CompletionBackend;
use crate::domains::prompts::{PromptDefinition, PromptService, definitions::BusinessSummaryPrompt};
use crate::domains::tools::{ToolError, ToolHandler, ToolKind};

/// Summarizes text for a business reader via the language model.
pub struct SummarizerTool {
    backend: Arc<dyn CompletionBackend>,
    prompts: Arc<PromptService>,
}

impl SummarizerTool {
    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Summarize text for a business user.";

    pub fn new(backend: Arc<dyn CompletionBackend>, prompts: Arc<PromptService>) -> Self {
        Self { backend, prompts }
    }
}

#[async_trait]
impl ToolHandler for SummarizerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Summarizer
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    #[instrument(skip_all)]
    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let prompt = self
            .prompts
            .render(BusinessSummaryPrompt::NAME, &[("text", input)])?;
        info!("Requesting summary ({} chars)", input.len());
        Ok(self.backend.complete(&prompt).await?)
    }
}
