//! Predicate evaluation over a listing
//!
//! `evaluate` is a pure function of the records, the filter state and the
//! evaluation instant. It is a stable filter: survivors keep their input order
//! and nothing is scored or sorted.

use super::category::Category;
use super::event::EventRecord;
use super::filter_state::FilterState;
use chrono::{DateTime, Utc};

/// Inclusive upper bound of the urgency window, in days
pub const URGENCY_WINDOW_DAYS: f64 = 7.0;

/// Select the records admitted by every active criterion, in input order
///
/// # Arguments
/// * `records` - The full listing
/// * `filter` - Current filter selections
/// * `now` - Evaluation instant, used by the urgency check
pub fn evaluate<'a>(
    records: &'a [EventRecord],
    filter: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a EventRecord> {
    // Lowercase the query once per pass
    let query = (!filter.search_query.is_empty()).then(|| filter.search_query.to_lowercase());

    records
        .iter()
        .filter(|record| matches_category(record, &filter.category))
        .filter(|record| !filter.urgency_only || closes_within_window(record, now))
        .filter(|record| {
            query
                .as_deref()
                .is_none_or(|query| matches_search(record, query))
        })
        .collect()
}

/// Category check: `All` admits everything, otherwise source or mode must match
pub fn matches_category(record: &EventRecord, category: &Category) -> bool {
    category.is_all()
        || category.matches_label(record.source.as_deref())
        || category.matches_label(record.mode.as_deref())
}

/// Urgency check: the deadline lies between `now` and `now + 7 days`, inclusive
///
/// Missing and unparseable deadlines are never urgent.
pub fn closes_within_window(record: &EventRecord, now: DateTime<Utc>) -> bool {
    record
        .reg_end_date
        .days_left(now)
        .is_some_and(|days| (0.0..=URGENCY_WINDOW_DAYS).contains(&days))
}

/// Search check against an already lowercased query
///
/// Looks for the query as a substring of title, description and themes.
/// Missing fields are skipped.
pub fn matches_search(record: &EventRecord, query_lower: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query_lower);

    contains(record.title.as_str())
        || record.description.as_deref().is_some_and(contains)
        || record.themes.as_deref().is_some_and(contains)
}
