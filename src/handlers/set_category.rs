//! Category selection handler for the listing MCP server

use crate::FindathonServerHandler;
use crate::handlers::visible_summary;
use crate::listing::Category;
use mcp_attr::Result as McpResult;
use tracing::{debug, warn};

impl FindathonServerHandler {
    /// Handles category selection. Any label is accepted; labels outside the
    /// filter bar are logged and reported back together with the labels the
    /// listing actually contains.
    pub async fn handle_set_category(&self, category: String) -> McpResult<String> {
        let category = Category::from(category.as_str());

        let mut view = self.lock_view()?;
        view.set_category(category.clone());
        debug!(category = %category, "category changed");

        let mut result = format!("Category set to '{}'. {}", category, visible_summary(&view));
        if !category.is_recognized() {
            warn!(category = %category, "category is not in the filter bar");
            let labels = view.listing().labels();
            result.push_str(&format!(
                "\nNote: '{}' is not a filter bar category; it is compared against source and mode labels as-is.",
                category
            ));
            if !labels.is_empty() {
                result.push_str(&format!("\nLabels in listing: {}", labels.join(", ")));
            }
        }

        Ok(result)
    }
}
