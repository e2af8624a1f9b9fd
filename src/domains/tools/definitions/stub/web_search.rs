//! Web search tool (placeholder).

use async_trait::async_trait;

use crate::domains::tools::{Capability, ToolError, ToolHandler, ToolKind};

/// Placeholder search that echoes the query.
#[derive(Debug, Clone, Default)]
pub struct WebSearchTool;

impl WebSearchTool {
    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the web (placeholder results, no live search).";

    pub fn new() -> Self {
        Self
    }

    pub fn search(query: &str) -> String {
        format!("🔎 Dummy search results for: {}", query)
    }
}

#[async_trait]
impl ToolHandler for WebSearchTool {
    fn kind(&self) -> ToolKind {
        ToolKind::WebSearch
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn capability(&self) -> Capability {
        Capability::Placeholder
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        Ok(Self::search(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_query() {
        let output = WebSearchTool::new()
            .invoke("search for growth agencies")
            .await
            .unwrap();
        assert_eq!(output, "🔎 Dummy search results for: search for growth agencies");
    }
}
