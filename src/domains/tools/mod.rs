//! Tools domain module.
//!
//! Tools are the capabilities a free-text query can be routed to. Exactly one
//! tool answers each query.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` contract and tool identities
//! - `registry.rs` - One handler per tool kind, with overrides
//! - `router.rs` - Query classification and failure folding
//! - `error.rs` - Tool-specific error types
//!
//! ## Replacing a Tool
//!
//! 1. Implement `ToolHandler` for the new type, reporting the same `ToolKind`
//! 2. Pass it to `ToolRegistry::builder(..).with_handler(..)`
//!
//! The router's selection rules do not change.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::{ToolRegistry, ToolRegistryBuilder};
pub use router::{QueryRouter, RouteResult, Selection, WARNING_MARKER};
