//! Request and response bodies shared by the JSON transports.

use serde::{Deserialize, Serialize};

use crate::domains::tools::{RouteResult, ToolKind, WARNING_MARKER};

/// Shown when a network caller sends a blank query.
pub const EMPTY_QUERY_MESSAGE: &str = "Error: user_input must not be empty";

/// `{ "user_input": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

/// `{ "response": "...", "tool": "..." }`
///
/// Handler failures travel in `response` as marked text; the transport
/// itself still reports success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
}

impl ChatResponse {
    /// Build the reply for a routed (or suppressed) query.
    pub fn from_outcome(outcome: Option<RouteResult>) -> Self {
        match outcome {
            Some(result) => Self {
                response: result.render(),
                tool: Some(result.handler().id().to_string()),
            },
            None => Self::error(EMPTY_QUERY_MESSAGE),
        }
    }

    /// A marked error reply with no tool attached.
    pub fn error(message: impl AsRef<str>) -> Self {
        Self {
            response: format!("{} {}", WARNING_MARKER, message.as_ref()),
            tool: None,
        }
    }

    /// Tool id as a [`ToolKind`], when one was selected.
    pub fn tool_kind(&self) -> Option<ToolKind> {
        let id = self.tool.as_deref()?;
        ToolKind::ALL.into_iter().find(|k| k.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_tool() {
        let response = ChatResponse::from_outcome(Some(RouteResult::Success {
            handler: ToolKind::Calculator,
            output: "4".into(),
        }));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"response": "4", "tool": "calculator"})
        );
        assert_eq!(response.tool_kind(), Some(ToolKind::Calculator));
    }

    #[test]
    fn test_empty_query_is_marked_error() {
        let response = ChatResponse::from_outcome(None);
        assert_eq!(response.response, "⚠️ Error: user_input must not be empty");
        assert!(response.tool.is_none());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"response": "⚠️ Error: user_input must not be empty"})
        );
    }
}
