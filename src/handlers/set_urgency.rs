//! Urgency toggle handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::handlers::visible_summary;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl FindathonServerHandler {
    /// Handles the urgency toggle.
    pub async fn handle_set_urgency(&self, enabled: bool) -> McpResult<String> {
        let mut view = self.lock_view()?;
        view.set_urgency(enabled);
        debug!(enabled, "urgency changed");

        Ok(format!(
            "Urgency filter {}. {}",
            if enabled { "enabled" } else { "disabled" },
            visible_summary(&view)
        ))
    }
}
