//! Generic answer tool - the router's catch-all.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::core::llm::CompletionBackend;
use crate::domains::prompts::{PromptDefinition, PromptService, definitions::AnswerQueryPrompt};
use crate::domains::tools::{ToolError, ToolHandler, ToolKind};

/// Answers any question by asking the language model.
pub struct GenericAnswerTool {
    backend: Arc<dyn CompletionBackend>,
    prompts: Arc<PromptService>,
}

impl GenericAnswerTool {
    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Answer a free-text question with the language model.";

    pub fn new(backend: Arc<dyn CompletionBackend>, prompts: Arc<PromptService>) -> Self {
        Self { backend, prompts }
    }
}

#[async_trait]
impl ToolHandler for GenericAnswerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::GenericAnswer
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    #[instrument(skip_all)]
    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let prompt = self
            .prompts
            .render(AnswerQueryPrompt::NAME, &[("input", input)])?;
        Ok(self.backend.complete(&prompt).await?)
    }
}
