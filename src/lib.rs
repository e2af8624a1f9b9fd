//! Multi-tool query agent.
//!
//! Routes free-text queries to one of five tools with fixed, ordered rules:
//! arithmetic goes to the calculator, "summarize" to the summarizer,
//! "company" to a company lookup, "search" to a web search, and everything
//! else to a general-purpose language-model answer.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the language-model backend, the
//!   [`AgentServer`](core::AgentServer) and its transports
//! - **domains**: the routing logic itself
//!   - **tools**: tool handlers, registry and the [`QueryRouter`](domains::tools::QueryRouter)
//!   - **prompts**: prompt templates used by the language-model tools
//!
//! # Example
//!
//! ```rust,no_run
//! use multi_tool_agent::core::{AgentServer, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = AgentServer::new(Config::from_env())?;
//!     if let Some(result) = server.handle_query("12 * 7").await {
//!         println!("{}", result.render());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{AgentServer, Config, Error, Result};
