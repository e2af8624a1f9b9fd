//! Company lookup tool (placeholder).
//!
//! Returns fixed figures; no data source is consulted. A real integration
//! replaces this handler through `ToolRegistryBuilder::with_handler`.

use async_trait::async_trait;

use crate::domains::tools::{Capability, ToolError, ToolHandler, ToolKind};

/// Placeholder company profile lookup.
#[derive(Debug, Clone, Default)]
pub struct CompanyLookupTool;

impl CompanyLookupTool {
    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Look up a company profile (placeholder figures, no live data).";

    pub fn new() -> Self {
        Self
    }

    /// Render the fixed company template for `name`.
    pub fn lookup(name: &str) -> String {
        format!("🏢 Company Info for {}: Revenue - $5M+, Employees - 50+", name)
    }
}

#[async_trait]
impl ToolHandler for CompanyLookupTool {
    fn kind(&self) -> ToolKind {
        ToolKind::CompanyLookup
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn capability(&self) -> Capability {
        Capability::Placeholder
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        Ok(Self::lookup(input))
    }
}
