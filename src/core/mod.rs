//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the agent,
//! including error handling, configuration, the language-model backend,
//! the server object and the transport layer.

pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::AgentServer;
pub use transport::{TransportConfig, TransportService};
