//! Structured logging setup
//!
//! stdout carries the MCP stdio protocol, so all log output goes to stderr.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// # Arguments
/// * `directives` - An `EnvFilter` directive string (e.g., "info", "findathon_mcp=debug")
pub fn init_logging(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
