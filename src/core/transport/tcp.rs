//! TCP transport implementation.
//!
//! Line-delimited JSON: each line in is a `ChatRequest`, each line out is a
//! `ChatResponse`. A malformed line gets an error reply and the connection
//! stays open.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::message::{ChatRequest, ChatResponse};
use super::{TransportConfig, TransportError, TransportResult, config::TcpConfig};
use crate::core::AgentServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts TCP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Tcp(tcp_config) => Some(Self::new(tcp_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport.
    pub async fn run(self, server: AgentServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (line-delimited JSON)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Accepted connection from {}", peer_addr);

                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    let server = server.clone();
                    tokio::spawn(async move {
                        let (read_half, write_half) = stream.into_split();
                        match Self::serve_lines(&server, BufReader::new(read_half), write_half).await {
                            Ok(()) => info!("Client {} disconnected", peer_addr),
                            Err(e) => warn!("Error while serving client {}: {}", peer_addr, e),
                        }
                    });
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Avoid spinning on persistent errors
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    /// Answer every request line until the reader is exhausted.
    pub async fn serve_lines<R, W>(server: &AgentServer, reader: R, mut writer: W) -> TransportResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<ChatRequest>(&line) {
                Ok(request) => {
                    ChatResponse::from_outcome(server.handle_query(&request.user_input).await)
                }
                Err(e) => {
                    warn!("Rejected request line: {}", e);
                    ChatResponse::error(format!("Error: invalid request body: {}", e))
                }
            };

            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    async fn exchange(input: &str) -> Vec<ChatResponse> {
        let server = AgentServer::new(Config::default()).unwrap();
        let mut output = Vec::new();
        TcpTransport::serve_lines(&server, input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_one_response_per_request_line() {
        let responses = exchange(
            "{\"user_input\":\"10-4\"}\n\n{\"user_input\":\"Acme company\"}\n",
        )
        .await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].response, "6");
        assert_eq!(responses[1].tool.as_deref(), Some("company_lookup"));
    }

    #[tokio::test]
    async fn test_malformed_line_keeps_connection() {
        let responses = exchange("not json\n{\"user_input\":\"2*4\"}\n").await;
        assert_eq!(responses.len(), 2);
        assert!(responses[0].response.starts_with("⚠️ Error: invalid request body"));
        assert_eq!(responses[1].response, "8");
    }

    #[tokio::test]
    async fn test_blank_user_input() {
        let responses = exchange("{\"user_input\":\"\"}\n").await;
        assert_eq!(responses[0].response, "⚠️ Error: user_input must not be empty");
    }

    #[test]
    fn test_address() {
        let transport = TcpTransport::new(TcpConfig::default());
        assert_eq!(transport.address(), "0.0.0.0:7000");
    }
}
