use crate::dedup;
use crate::listing::{EventListing, EventRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Read-only access to a listing file (TOML)
pub struct ListingStore {
    file_path: PathBuf,
}

impl ListingStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the listing, deduplicated and ordered by deadline
    ///
    /// A missing file yields an empty listing.
    pub fn load(&self) -> Result<EventListing> {
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "listing file not found, starting empty");
            return Ok(EventListing::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let listing = parse_listing(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;

        info!(
            path = %self.file_path.display(),
            events = listing.len(),
            "listing loaded"
        );
        Ok(listing)
    }
}

/// Parse listing text and prepare it for display
pub fn parse_listing(content: &str) -> Result<EventListing> {
    let raw: EventListing = toml::from_str(content)?;
    let format_version = raw.format_version;

    let (mut events, removed) = dedup::deduplicate(raw.events);
    if removed > 0 {
        info!(removed, "dropped duplicate listings");
    }
    order_by_deadline(&mut events);

    Ok(EventListing {
        format_version,
        events,
    })
}

/// Stable sort by deadline ascending; TBA and unparseable deadlines go last
pub fn order_by_deadline(events: &mut [EventRecord]) {
    events.sort_by_key(|record| {
        let instant = record.reg_end_date.instant();
        (instant.is_none(), instant)
    });
}
