//! Prompts domain module.
//!
//! Prompts are the fixed instruction templates the LLM-backed tools wrap
//! around user text before it is sent to the backend.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt lookup and rendering
//! - `templates.rs` - Template rendering engine
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::{PromptArgument, PromptDefinition};
pub use error::PromptError;
pub use service::PromptService;
pub use templates::PromptTemplate;
