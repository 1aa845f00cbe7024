//! Findathon MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for browsing a
//! listing of upcoming hackathons. The listing is loaded once; clients then
//! narrow it down by platform or attendance mode, by registration urgency and by
//! free-text search, and read back the visible cards.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `FindathonServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `listing` module - Event records, filter state and the filter engine
//! - **Persistence Layer**: `storage` module - Read-only TOML listing with optional Git refresh
//!
//! # Example
//!
//! ```no_run
//! use findathon_mcp::FindathonServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = FindathonServerHandler::new("hackathons.toml", false)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod dedup;
pub mod formatting;
mod git_ops;
pub mod handlers;
pub mod listing;
pub mod logging;
mod storage;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

// Re-export commonly used types
pub use git_ops::{GitOps, PullOutcome};
pub use listing::{
    Category, Deadline, EventListing, EventRecord, FilterState, ListingView, evaluate,
};
pub use storage::{ListingStore, parse_listing};

/// MCP Server handler for hackathon listings
///
/// Owns a single listing view: the records loaded at startup and the filter
/// selections made by the client. Filter changes live only as long as the
/// server process.
pub struct FindathonServerHandler {
    pub(crate) view: Mutex<ListingView>,
}

impl FindathonServerHandler {
    /// Create a new handler from a listing file
    ///
    /// # Arguments
    /// * `listing_path` - Path to the listing file (TOML format)
    /// * `sync_git` - Refresh the file's git repository from origin before loading
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use findathon_mcp::FindathonServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = FindathonServerHandler::new("hackathons.toml", false)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(listing_path: &str, sync_git: bool) -> Result<Self> {
        let store = ListingStore::new(listing_path);

        if sync_git {
            // A failed refresh falls back to the local copy
            match GitOps::new(store.file_path()).pull() {
                Ok(outcome) => info!(?outcome, "listing repository refreshed"),
                Err(e) => warn!(error = %e, "git refresh failed, using local listing"),
            }
        }

        Ok(Self::from_listing(store.load()?))
    }

    /// Create a handler over an already loaded listing
    pub fn from_listing(listing: EventListing) -> Self {
        Self {
            view: Mutex::new(ListingView::new(listing)),
        }
    }

    /// Lock the listing view for one tool call
    pub(crate) fn lock_view(&self) -> McpResult<MutexGuard<'_, ListingView>> {
        match self.view.lock() {
            Ok(view) => Ok(view),
            Err(_) => bail_public!(_, "Listing state is unavailable after an earlier failure"),
        }
    }
}

/// Hackathon discovery server: browse upcoming hackathons and narrow them down.
///
/// The listing holds hackathons from several platforms (Devpost, Devfolio, MLH,
/// Unstop, ...), ordered by registration deadline. Three independent filters
/// apply at once:
/// - **category**: a platform or attendance mode ("Online", "In-Person"); "all" disables it
/// - **urgency**: only events whose registration closes within the next 7 days
/// - **search**: case-insensitive text search in title, description and themes
///
/// Filters persist between calls until changed or reset.
#[mcp_server]
impl McpServer for FindathonServerHandler {
    /// **Browse**: Show the hackathons matching the current filters, soonest deadline first.
    /// **Workflow**: Adjust filters with set_category/set_urgency/search, then list.
    #[tool]
    async fn list(
        &self,
        /// Leave descriptions out of the cards (optional, default false)
        exclude_description: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list(exclude_description).await
    }

    /// **Category**: Filter by platform (Devpost, Devfolio, MLH, Unstop) or mode (Online, In-Person).
    /// **Use**: "all" shows every category. Other labels are matched case-insensitively against source and mode.
    #[tool]
    async fn set_category(
        &self,
        /// Category label, e.g. "all", "MLH", "Online"
        category: String,
    ) -> McpResult<String> {
        self.handle_set_category(category).await
    }

    /// **Urgency**: Only show hackathons whose registration closes within the next 7 days.
    #[tool]
    async fn set_urgency(
        &self,
        /// true to show only closing-soon events, false to show all deadlines
        enabled: bool,
    ) -> McpResult<String> {
        self.handle_set_urgency(enabled).await
    }

    /// **Search**: Case-insensitive text search in title, description and themes.
    /// **Tip**: Use empty string "" to clear the search.
    #[tool]
    async fn search(
        &self,
        /// Text to look for
        query: String,
    ) -> McpResult<String> {
        self.handle_search(query).await
    }

    /// **Filters**: Show the active category, urgency toggle, search text and match counts.
    #[tool]
    async fn filters(&self) -> McpResult<String> {
        self.handle_filters().await
    }

    /// **Reset**: Clear all filters and show the full listing.
    #[tool]
    async fn reset_filters(&self) -> McpResult<String> {
        self.handle_reset_filters().await
    }
}
