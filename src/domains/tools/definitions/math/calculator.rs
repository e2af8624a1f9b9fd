//! Calculator tool.
//!
//! Evaluates the arithmetic found in the query with the restricted grammar
//! in `expression.rs`. Nothing in the input is ever executed as code.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::expression::{evaluate, extract_expression, ExpressionError};
use crate::domains::tools::{ToolError, ToolHandler, ToolKind};

/// Arithmetic over numbers and `+ - * / ( )`.
#[derive(Debug, Clone, Default)]
pub struct CalculatorTool;

impl CalculatorTool {
    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Evaluate arithmetic expressions using +, -, *, / and parentheses.";

    pub fn new() -> Self {
        Self
    }

    /// Evaluate the arithmetic in `input` and format the result.
    pub fn calculate(input: &str) -> Result<String, ExpressionError> {
        let expr = extract_expression(input).ok_or(ExpressionError::Empty)?;
        debug!("Evaluating expression: {}", expr);
        evaluate(expr).map(|n| n.to_string())
    }
}

#[async_trait]
impl ToolHandler for CalculatorTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Calculator
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    #[instrument(skip_all)]
    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        Self::calculate(input).map_err(|e| ToolError::calculation(e.to_string()))
    }
}
