//! Tool handler contract.
//!
//! Every tool the router can select implements [`ToolHandler`]. Handlers are
//! stateless: one call in, one text out, no memory between calls.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use super::error::ToolError;

/// The fixed set of tools a query can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Calculator,
    Summarizer,
    CompanyLookup,
    WebSearch,
    GenericAnswer,
}

impl ToolKind {
    /// Every tool, in routing precedence order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Calculator,
        ToolKind::Summarizer,
        ToolKind::CompanyLookup,
        ToolKind::WebSearch,
        ToolKind::GenericAnswer,
    ];

    /// Stable identifier used in logs and responses.
    pub fn id(self) -> &'static str {
        match self {
            ToolKind::Calculator => "calculator",
            ToolKind::Summarizer => "summarizer",
            ToolKind::CompanyLookup => "company_lookup",
            ToolKind::WebSearch => "web_search",
            ToolKind::GenericAnswer => "generic_answer",
        }
    }

    /// Position in [`ToolKind::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether a tool does real work or returns a canned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Live,
    /// Fixed-template stand-in for an integration that does not exist yet.
    Placeholder,
}

/// Trait implemented by every routable tool.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Which tool this handler answers for.
    fn kind(&self) -> ToolKind;

    /// Human-readable description of the tool.
    fn description(&self) -> &str;

    fn capability(&self) -> Capability {
        Capability::Live
    }

    /// Run the tool on the router-supplied argument.
    async fn invoke(&self, input: &str) -> Result<String, ToolError>;
}

/// Listing entry for a registered tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub description: String,
    pub capability: Capability,
}
