//! Duplicate removal for aggregated listings
//!
//! The same hackathon is often published on several platforms. Two records are
//! considered duplicates when their trimmed, lowercased titles and their
//! deadlines are equal; the first one seen is kept. Parsed deadlines compare by
//! instant, so the same moment written two ways is one deadline.

use crate::listing::EventRecord;
use std::collections::HashSet;

/// Identity of a record for duplicate detection
pub fn dedup_key(record: &EventRecord) -> String {
    format!(
        "{}|{}",
        record.title.trim().to_lowercase(),
        record.reg_end_date.key_text()
    )
}

/// Drop later duplicates, keeping order. Returns the survivors and the number removed.
pub fn deduplicate(events: Vec<EventRecord>) -> (Vec<EventRecord>, usize) {
    let total = events.len();
    let mut seen = HashSet::new();
    let unique: Vec<EventRecord> = events
        .into_iter()
        .filter(|record| seen.insert(dedup_key(record)))
        .collect();
    let removed = total - unique.len();
    (unique, removed)
}
