//! Tools answered by the language-model backend.

pub mod generic_answer;
pub mod summarizer;

pub use generic_answer::GenericAnswerTool;
pub use summarizer::SummarizerTool;
