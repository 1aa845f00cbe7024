//! List handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::formatting;
use crate::listing::utc_now;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl FindathonServerHandler {
    /// Handles list operations - evaluates the current filters and formats the visible cards.
    pub async fn handle_list(&self, exclude_description: Option<bool>) -> McpResult<String> {
        // One instant per evaluation pass
        let now = utc_now();

        let view = self.lock_view()?;
        let visible = view.visible(now);
        debug!(
            visible = visible.len(),
            total = view.listing().len(),
            "listing evaluated"
        );

        Ok(formatting::format_events(
            &visible,
            exclude_description.unwrap_or(false),
        ))
    }
}
