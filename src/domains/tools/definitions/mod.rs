//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod llm;
pub mod math;
pub mod stub;

pub use llm::{GenericAnswerTool, SummarizerTool};
pub use math::CalculatorTool;
pub use stub::{CompanyLookupTool, WebSearchTool};
