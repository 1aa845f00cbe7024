//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use findathon_mcp::{Deadline, EventRecord, FindathonServerHandler};
use std::fs;
use tempfile::NamedTempFile;

/// Fixed evaluation instant for deterministic tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// Create a test record with minimal fields
pub fn create_test_event(id: &str, title: &str) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

/// Create a test record with the filterable fields set
pub fn create_full_test_event(
    id: &str,
    title: &str,
    source: &str,
    mode: &str,
    reg_end_date: Deadline,
) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        source: Some(source.to_string()),
        mode: Some(mode.to_string()),
        reg_end_date,
        ..Default::default()
    }
}

/// Deadline `days` (fractional) after `now`, at millisecond resolution
pub fn days_after(now: DateTime<Utc>, days: f64) -> Deadline {
    Deadline::At(now + Duration::milliseconds((days * 86_400_000.0).round() as i64))
}

/// The two-record listing used throughout the scenario tests
pub fn scenario_events(now: DateTime<Utc>) -> Vec<EventRecord> {
    vec![
        create_full_test_event("1", "AI Sprint", "MLH", "Online", days_after(now, 2.0)),
        create_full_test_event("2", "Web3 Jam", "Devpost", "In-Person", days_after(now, 20.0)),
    ]
}

/// Write a listing file and create a handler over it
pub fn get_test_handler(listing: &str) -> (FindathonServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), listing).unwrap();
    let handler = FindathonServerHandler::new(temp_file.path().to_str().unwrap(), false).unwrap();
    (handler, temp_file)
}

/// Extract the card IDs from a list() response
/// Card format: "- [<id>] <title> (...)"
pub fn extract_ids_from_list(response: &str) -> Vec<String> {
    response
        .lines()
        .filter_map(|line| line.strip_prefix("- ["))
        .filter_map(|rest| rest.split_once(']').map(|(id, _)| id.to_string()))
        .collect()
}
