//! Agent server - the object every transport talks to.
//!
//! The server owns the configuration and a shared [`QueryRouter`]. HTTP, the
//! form UI, the terminal session and TCP all call [`AgentServer::handle_query`],
//! so routing behaves the same whichever surface a query arrives on.

use std::sync::Arc;

use tracing::{debug, info};

use super::config::Config;
use super::error::Result;
use super::llm::build_backend;
use crate::domains::tools::{QueryRouter, RouteResult, ToolDescriptor, ToolRegistry};

/// The agent server handler.
#[derive(Clone)]
pub struct AgentServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared, stateless router.
    router: Arc<QueryRouter>,
}

impl AgentServer {
    /// Create a server with the default tools and the configured backend.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let backend = build_backend(&config)?;
        let router = QueryRouter::new(ToolRegistry::new(backend));

        info!("Registered tools: {}", router.registry().tool_names().join(", "));

        Ok(Self::with_router(config, router))
    }

    /// Create a server around an already-built router.
    pub fn with_router(config: Config, router: QueryRouter) -> Self {
        Self {
            config: Arc::new(config),
            router: Arc::new(router),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Route one query.
    ///
    /// Returns `None` for blank input, which is never routed.
    pub async fn handle_query(&self, input: &str) -> Option<RouteResult> {
        if input.trim().is_empty() {
            debug!("Ignoring blank query");
            return None;
        }
        Some(self.router.route(input).await)
    }

    /// Describe the registered tools.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.router.registry().describe()
    }
}
