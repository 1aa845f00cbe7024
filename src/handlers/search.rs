//! Search handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::handlers::visible_summary;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl FindathonServerHandler {
    /// Handles the search query. The query is stored verbatim; an empty string clears it.
    pub async fn handle_search(&self, query: String) -> McpResult<String> {
        let mut view = self.lock_view()?;
        let cleared = query.is_empty();
        view.set_search_query(query);
        debug!(query = %view.filter().search_query, "search query changed");

        let head = if cleared {
            "Search cleared.".to_string()
        } else {
            format!("Search set to \"{}\".", view.filter().search_query)
        };
        Ok(format!("{} {}", head, visible_summary(&view)))
    }
}
