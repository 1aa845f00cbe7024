use super::event::EventRecord;
use serde::Deserialize;

/// Current listing file format version
pub const FORMAT_VERSION: u32 = 1;

/// The full, already ordered set of hackathon listings for one view
///
/// A listing is loaded once and never modified afterwards. Filtering borrows
/// from it and produces new sequences of references.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventListing {
    /// Format version of the listing file
    pub format_version: u32,

    /// Records in upstream order (deadline ascending, undated last)
    pub(crate) events: Vec<EventRecord>,
}

impl Default for EventListing {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            events: Vec::new(),
        }
    }
}

impl EventListing {
    /// Create an empty listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records that are already in display order
    pub fn from_events(events: Vec<EventRecord>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    /// An absent record sequence is the same as an empty one
    pub fn from_optional(events: Option<Vec<EventRecord>>) -> Self {
        Self::from_events(events.unwrap_or_default())
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct non-empty source and mode labels, in first-seen order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for record in &self.events {
            for label in [record.source.as_deref(), record.mode.as_deref()]
                .into_iter()
                .flatten()
            {
                if !label.is_empty() && !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }
}
