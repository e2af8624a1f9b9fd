//! STDIO transport implementation.
//!
//! An interactive terminal session: prompt, read a line, print the answer.
//! Logs go to stderr so they never interleave with answers on stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use super::TransportResult;
use crate::core::AgentServer;

/// Printed before every read.
pub const PROMPT: &str = "Enter your query:";

/// Lines that end the session.
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport on the process's stdin/stdout.
    pub async fn run(server: AgentServer) -> TransportResult<()> {
        info!("Ready - type a query, or 'exit' to quit");

        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        Self::session(&server, stdin, stdout).await?;

        info!("STDIO transport finished");
        Ok(())
    }

    /// Drive one session over any line reader and writer.
    ///
    /// Blank lines are skipped without routing. EOF ends the session.
    pub async fn session<R, W>(server: &AgentServer, mut reader: R, mut writer: W) -> TransportResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            writer.write_all(format!("{} ", PROMPT).as_bytes()).await?;
            writer.flush().await?;

            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                debug!("EOF on input");
                writer.write_all(b"\n").await?;
                break;
            }

            // Only the line ending is dropped; tools see the rest as typed.
            let query = line.trim_end_matches(['\n', '\r']);
            if EXIT_COMMANDS.contains(&query.trim().to_lowercase().as_str()) {
                break;
            }

            let Some(result) = server.handle_query(query).await else {
                continue;
            };

            writer.write_all(result.render().as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    async fn run_session(input: &str) -> String {
        let server = AgentServer::new(Config::default()).unwrap();
        let mut output = Vec::new();
        StdioTransport::session(&server, input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_answers_each_line() {
        let output = run_session("2+2\nsearch rust\n").await;
        assert!(output.starts_with("Enter your query: 4\n"));
        assert!(output.contains("🔎 Dummy search results for: search rust\n"));
    }

    #[tokio::test]
    async fn test_query_is_passed_as_typed() {
        let output = run_session("  search rust  \r\n").await;
        assert!(output.contains("🔎 Dummy search results for:   search rust  \n"));
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped() {
        let output = run_session("\n   \n3*3\n").await;
        assert_eq!(output.matches(PROMPT).count(), 4);
        assert!(output.contains("9\n"));
        assert!(!output.contains("Error"));
    }

    #[tokio::test]
    async fn test_exit_stops_before_later_lines() {
        let output = run_session("1+1\nQuit\n2+2\n").await;
        assert!(output.contains("2\n"));
        assert!(!output.contains("4"));
    }

    #[tokio::test]
    async fn test_failures_are_printed_not_fatal() {
        let output = run_session("2+\n5-1\n").await;
        assert!(output.contains("⚠️ Error: Calculation error"));
        assert!(output.contains("4\n"));
    }
}
