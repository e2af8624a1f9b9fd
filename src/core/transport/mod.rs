//! Transport layer for the agent.
//!
//! Every surface hands queries to [`AgentServer::handle_query`](crate::core::AgentServer::handle_query):
//! - **HTTP**: JSON `POST /chat` plus the HTML form UI - feature: `http`
//! - **STDIO**: interactive terminal session - feature: `stdio`
//! - **TCP**: line-delimited JSON - feature: `tcp`
//!
//! # Feature Flags
//!
//! - `http` (default): adds axum, tower, tower-http
//! - `stdio` (default): no extra dependencies
//! - `tcp`: adds tokio/net

mod config;
mod error;
mod message;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod ui;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use message::{ChatRequest, ChatResponse, EMPTY_QUERY_MESSAGE};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
