use super::deadline::{Deadline, deserialize_deadline};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Shown in place of a missing description
pub const DESCRIPTION_FALLBACK: &str = "No description provided.";

/// Shown in place of a missing attendance mode
pub const MODE_FALLBACK: &str = "Hybrid";

/// Get the current instant in UTC
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// A single hackathon listing
///
/// Records are immutable once loaded. Only `source`, `mode`, `reg_end_date`,
/// `title`, `description` and `themes` take part in filtering; the rest is
/// display data. Field names follow the listing file (`snake_case`), with the
/// `camelCase` spellings accepted as aliases.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Unique identifier (e.g., "devpost-ai-sprint")
    pub id: String,
    /// Event title
    pub title: String,
    /// Optional long description
    pub description: Option<String>,
    /// Optional comma-separated themes (e.g., "AI, Web3")
    pub themes: Option<String>,
    /// Originating platform (e.g., "Devpost", "MLH")
    pub source: Option<String>,
    /// Attendance mode (e.g., "Online", "In-Person")
    pub mode: Option<String>,
    /// Registration deadline
    #[serde(alias = "regEndDate", deserialize_with = "deserialize_deadline")]
    pub reg_end_date: Deadline,
    /// Registration closed flag (display only)
    #[serde(alias = "isClosed")]
    pub is_closed: bool,
    /// Link to the event page
    pub link: Option<String>,
    /// Banner image
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl EventRecord {
    /// Description for display, falling back to a canned text
    pub fn description_or_fallback(&self) -> &str {
        self.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Attendance mode for display, falling back to "Hybrid"
    pub fn mode_label(&self) -> &str {
        match self.mode.as_deref() {
            Some(mode) if !mode.is_empty() => mode,
            _ => MODE_FALLBACK,
        }
    }
}
