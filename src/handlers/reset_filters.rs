//! Reset handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::handlers::visible_summary;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl FindathonServerHandler {
    /// Handles resetting all filters to their defaults.
    pub async fn handle_reset_filters(&self) -> McpResult<String> {
        let mut view = self.lock_view()?;
        view.reset_filters();
        debug!("filters reset");

        Ok(format!("Filters reset. {}", visible_summary(&view)))
    }
}
