//! Filter state report handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::formatting;
use crate::listing::utc_now;
use mcp_attr::Result as McpResult;

impl FindathonServerHandler {
    /// Handles reporting the current filter state.
    pub async fn handle_filters(&self) -> McpResult<String> {
        let now = utc_now();
        let view = self.lock_view()?;
        let visible = view.visible(now).len();

        Ok(formatting::format_filter_state(
            view.filter(),
            visible,
            view.listing(),
        ))
    }
}
