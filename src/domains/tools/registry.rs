//! Tool Registry - the fixed set of routable tools.
//!
//! The registry always holds exactly one handler per [`ToolKind`]. Defaults
//! are installed by the builder; any of them can be swapped for another
//! implementation without touching the router.

use std::sync::Arc;

use tracing::info;

use super::definitions::{
    CalculatorTool, CompanyLookupTool, GenericAnswerTool, SummarizerTool, WebSearchTool,
};
use super::handlers::{ToolDescriptor, ToolHandler, ToolKind};
use crate::core::llm::CompletionBackend;
use crate::domains::prompts::PromptService;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - one handler per tool kind.
pub struct ToolRegistry {
    /// Indexed by `ToolKind::index()`.
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a registry with the default handlers.
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self::builder(backend).build()
    }

    /// Start from the default handlers and override selectively.
    pub fn builder(backend: Arc<dyn CompletionBackend>) -> ToolRegistryBuilder {
        ToolRegistryBuilder::new(backend)
    }

    /// The handler registered for `kind`.
    pub fn handler(&self, kind: ToolKind) -> &dyn ToolHandler {
        self.handlers[kind.index()].as_ref()
    }

    /// Get all tool names, in routing precedence order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|k| k.id()).collect()
    }

    /// Describe every registered tool.
    pub fn describe(&self) -> Vec<ToolDescriptor> {
        self.handlers
            .iter()
            .map(|h| ToolDescriptor {
                id: h.kind().id(),
                description: h.description().to_string(),
                capability: h.capability(),
            })
            .collect()
    }
}

/// Builder for [`ToolRegistry`].
pub struct ToolRegistryBuilder {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistryBuilder {
    fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        let prompts = Arc::new(PromptService::new());

        // Same order as ToolKind::ALL.
        let handlers: Vec<Arc<dyn ToolHandler>> = vec![
            Arc::new(CalculatorTool::new()),
            Arc::new(SummarizerTool::new(backend.clone(), prompts.clone())),
            Arc::new(CompanyLookupTool::new()),
            Arc::new(WebSearchTool::new()),
            Arc::new(GenericAnswerTool::new(backend, prompts)),
        ];

        Self { handlers }
    }

    /// Replace the handler for the kind `handler` reports.
    pub fn with_handler(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        let kind = handler.kind();
        info!("Overriding {} tool handler", kind);
        self.handlers[kind.index()] = handler;
        self
    }

    /// Build the registry.
    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            handlers: self.handlers,
        }
    }
}
