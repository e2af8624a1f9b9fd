//! Query Router - picks one tool per query and runs it.
//!
//! Selection is an ordered rule list, first match wins:
//!
//! 1. trimmed input contains `+`, `-`, `*` or `/` -> calculator (trimmed input)
//! 2. lowercase input contains `summarize` -> summarizer
//! 3. lowercase input contains `company` -> company lookup
//! 4. lowercase input contains `search` -> web search
//! 5. anything else -> generic answer
//!
//! Rules 2-5 forward the untrimmed input. Keyword matches are
//! plain substring matches.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{info, instrument, warn};

use super::handlers::ToolKind;
use super::registry::ToolRegistry;

/// Prefix placed in front of failure messages when rendered for people.
pub const WARNING_MARKER: &str = "⚠️";

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Which tool a query goes to, and the text it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub kind: ToolKind,
    pub argument: &'a str,
}

/// Outcome of routing one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult {
    /// The selected tool answered.
    Success { handler: ToolKind, output: String },
    /// The selected tool failed; `message` reads `Error: <cause>`.
    Failure { handler: ToolKind, message: String },
}

impl RouteResult {
    /// The tool that was selected.
    pub fn handler(&self) -> ToolKind {
        match self {
            RouteResult::Success { handler, .. } | RouteResult::Failure { handler, .. } => {
                *handler
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RouteResult::Success { .. })
    }

    /// Text shown to the caller: output verbatim, or the marked error.
    pub fn render(&self) -> String {
        match self {
            RouteResult::Success { output, .. } => output.clone(),
            RouteResult::Failure { message, .. } => format!("{} {}", WARNING_MARKER, message),
        }
    }
}

/// Routes queries to the tools in a [`ToolRegistry`].
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct QueryRouter {
    registry: Arc<ToolRegistry>,
}

impl QueryRouter {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Pick the tool for `input`. Total and deterministic.
    pub fn select(input: &str) -> Selection<'_> {
        let trimmed = input.trim();
        if trimmed.contains(OPERATORS) {
            return Selection {
                kind: ToolKind::Calculator,
                argument: trimmed,
            };
        }

        let lowered = input.to_lowercase();
        let kind = if lowered.contains("summarize") {
            ToolKind::Summarizer
        } else if lowered.contains("company") {
            ToolKind::CompanyLookup
        } else if lowered.contains("search") {
            ToolKind::WebSearch
        } else {
            ToolKind::GenericAnswer
        };

        Selection {
            kind,
            argument: input,
        }
    }

    /// Select a tool, invoke it, and fold any failure into the result.
    ///
    /// Never returns an error and never panics on a handler's behalf.
    #[instrument(skip_all, fields(tool))]
    pub async fn route(&self, input: &str) -> RouteResult {
        let selection = Self::select(input);
        let kind = selection.kind;
        tracing::Span::current().record("tool", kind.id());
        info!("Routing query to {}", kind);

        let handler = self.registry.handler(kind);
        let outcome = AssertUnwindSafe(handler.invoke(selection.argument))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(output)) => RouteResult::Success {
                handler: kind,
                output,
            },
            Ok(Err(e)) => {
                warn!("Tool {} failed: {}", kind, e);
                RouteResult::Failure {
                    handler: kind,
                    message: format!("Error: {}", e),
                }
            }
            Err(panic) => {
                let detail = panic_message(panic.as_ref());
                warn!("Tool {} panicked: {}", kind, detail);
                RouteResult::Failure {
                    handler: kind,
                    message: format!("Error: {} tool panicked: {}", kind, detail),
                }
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::llm::scripted::ScriptedBackend;
    use crate::core::llm::{CompletionBackend, UnconfiguredBackend};
    use crate::domains::tools::{ToolError, ToolHandler};
    use async_trait::async_trait;

    fn router_with(backend: Arc<dyn CompletionBackend>) -> QueryRouter {
        QueryRouter::new(ToolRegistry::new(backend))
    }

    fn offline_router() -> QueryRouter {
        router_with(Arc::new(UnconfiguredBackend))
    }

    #[test]
    fn test_operators_always_win() {
        let inputs = [
            "2+2",
            "please summarize 2+2",
            "company revenue 5*3",
            "search 10/2",
            "summarize the well-known company search",
            "a-b",
        ];
        for input in inputs {
            assert_eq!(QueryRouter::select(input).kind, ToolKind::Calculator, "{}", input);
        }
    }

    #[test]
    fn test_calculator_gets_trimmed_input() {
        let selection = QueryRouter::select("  3 * 4 \n");
        assert_eq!(selection.argument, "3 * 4");
    }

    #[test]
    fn test_keyword_precedence() {
        assert_eq!(
            QueryRouter::select("Summarize the company search results").kind,
            ToolKind::Summarizer
        );
        assert_eq!(
            QueryRouter::select("company SEARCH").kind,
            ToolKind::CompanyLookup
        );
        assert_eq!(
            QueryRouter::select("SEARCH for agencies").kind,
            ToolKind::WebSearch
        );
    }

    #[test]
    fn test_keywords_are_unanchored() {
        assert_eq!(
            QueryRouter::select("discompany").kind,
            ToolKind::CompanyLookup
        );
        assert_eq!(QueryRouter::select("research").kind, ToolKind::WebSearch);
    }

    #[test]
    fn test_keyword_tools_get_untrimmed_input() {
        let input = "  please SUMMARIZE this  ";
        let selection = QueryRouter::select(input);
        assert_eq!(selection.kind, ToolKind::Summarizer);
        assert_eq!(selection.argument, input);
    }

    #[test]
    fn test_generic_answer_iff_no_rule_matches() {
        let cases = [
            ("What is the capital of France?", ToolKind::GenericAnswer),
            ("hello there", ToolKind::GenericAnswer),
            ("summarize", ToolKind::Summarizer),
            ("our company", ToolKind::CompanyLookup),
            ("searching", ToolKind::WebSearch),
            ("1-1", ToolKind::Calculator),
        ];
        for (input, expected) in cases {
            assert_eq!(QueryRouter::select(input).kind, expected, "{}", input);
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        for input in ["2+2", "summarize x", "company", "search", "why?"] {
            assert_eq!(QueryRouter::select(input), QueryRouter::select(input));
        }
    }

    #[tokio::test]
    async fn test_route_calculator_success() {
        let result = offline_router().route("2+2").await;
        assert_eq!(
            result,
            RouteResult::Success {
                handler: ToolKind::Calculator,
                output: "4".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_route_calculator_failure_is_marked_text() {
        let result = offline_router().route("2+").await;
        assert!(!result.is_success());
        assert_eq!(result.handler(), ToolKind::Calculator);
        assert_eq!(
            result.render(),
            "⚠️ Error: Calculation error: unexpected end of expression"
        );
    }

    #[tokio::test]
    async fn test_route_numbers_in_prose_are_calculation_errors() {
        let router = offline_router();
        for input in [
            "Compare Q1-Q2 revenue in 2023",
            "summarize the 2023-2024 report",
            "call 555-1234",
            "1e3*2",
        ] {
            let result = router.route(input).await;
            assert_eq!(result.handler(), ToolKind::Calculator, "{}", input);
            assert!(!result.is_success(), "{}", input);
            assert!(
                result.render().starts_with("⚠️ Error: Calculation error"),
                "{}",
                input
            );
        }
    }

    #[tokio::test]
    async fn test_route_precedence_scenario() {
        let backend = Arc::new(ScriptedBackend::replying("a summary"));
        let result = router_with(backend.clone()).route("please summarize 2+2").await;
        assert_eq!(result.handler(), ToolKind::Calculator);
        assert_eq!(result.render(), "4");
        assert!(backend.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_stubs_work_without_backend() {
        let router = offline_router();

        let company = router.route("tell me about this company").await;
        assert_eq!(
            company.render(),
            "🏢 Company Info for tell me about this company: Revenue - $5M+, Employees - 50+"
        );

        let search = router.route("search for growth agencies").await;
        assert_eq!(
            search.render(),
            "🔎 Dummy search results for: search for growth agencies"
        );
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_route_failure() {
        let result = router_with(Arc::new(ScriptedBackend::failing()))
            .route("summarize our quarter")
            .await;
        assert_eq!(
            result,
            RouteResult::Failure {
                handler: ToolKind::Summarizer,
                message: "Error: LLM API error 503: backend unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_generic_answer_uses_backend() {
        let result = router_with(Arc::new(ScriptedBackend::replying("42")))
            .route("What is the meaning of life?")
            .await;
        assert_eq!(
            result,
            RouteResult::Success {
                handler: ToolKind::GenericAnswer,
                output: "42".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_affect_next_call() {
        let router = offline_router();
        assert!(!router.route("hello").await.is_success());
        assert!(router.route("1+1").await.is_success());
    }

    struct PanickingSearch;

    #[async_trait]
    impl ToolHandler for PanickingSearch {
        fn kind(&self) -> ToolKind {
            ToolKind::WebSearch
        }

        fn description(&self) -> &str {
            "always panics"
        }

        async fn invoke(&self, _input: &str) -> Result<String, ToolError> {
            panic!("index out of range")
        }
    }

    #[tokio::test]
    async fn test_panicking_handler_is_caught() {
        let registry = ToolRegistry::builder(Arc::new(UnconfiguredBackend))
            .with_handler(Arc::new(PanickingSearch))
            .build();
        let router = QueryRouter::new(registry);

        let result = router.route("search anything").await;
        assert_eq!(
            result.render(),
            "⚠️ Error: web_search tool panicked: index out of range"
        );
        assert!(router.route("2*3").await.is_success());
    }

    #[tokio::test]
    async fn test_concurrent_routes_are_independent() {
        let router = Arc::new(offline_router());
        let inputs = ["1+1", "2*3", "company", "search", "10/4"];

        let results = futures::future::join_all(inputs.iter().map(|input| {
            let router = router.clone();
            async move { router.route(input).await.render() }
        }))
        .await;

        assert_eq!(results[0], "2");
        assert_eq!(results[1], "6");
        assert!(results[2].starts_with("🏢"));
        assert!(results[3].starts_with("🔎"));
        assert_eq!(results[4], "2.5");
    }
}
