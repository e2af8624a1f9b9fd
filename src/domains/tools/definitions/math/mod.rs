pub mod calculator;
pub mod expression;

pub use calculator::CalculatorTool;
pub use expression::{ExpressionError, Number};
