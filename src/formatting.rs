//! Formatting helper functions for the listing MCP server
//!
//! This module renders listing cards and the filter bar as plain text.

use crate::listing::{
    Deadline, EventListing, EventRecord, FilterState, KNOWN_CATEGORIES, URGENCY_WINDOW_DAYS,
};

/// Format a registration deadline the way the listing cards show it
///
/// Known deadlines render as a long US date ("March 1, 2026"), missing ones
/// as "TBA" and unparseable ones as "Invalid Date".
pub fn format_deadline(deadline: &Deadline) -> String {
    match deadline {
        Deadline::At(instant) => instant.format("%B %-d, %Y").to_string(),
        Deadline::Tba => "TBA".to_string(),
        Deadline::Invalid(_) => "Invalid Date".to_string(),
    }
}

/// Format visible records as listing cards
///
/// # Arguments
/// * `records` - Records to render, in display order
/// * `exclude_description` - Whether to leave descriptions out
///
/// # Returns
/// Formatted string representation of the cards
pub fn format_events(records: &[&EventRecord], exclude_description: bool) -> String {
    if records.is_empty() {
        return "No hackathons found. We couldn't find any events matching your filters. Try adjusting them."
            .to_string();
    }

    let mut result = format!("Found {} hackathon(s):\n\n", records.len());
    for record in records {
        result.push_str(&format!(
            "- [{}] {} (mode: {}, source: {})",
            record.id,
            record.title,
            record.mode_label(),
            record.source.as_deref().unwrap_or("-"),
        ));
        if record.is_closed {
            result.push_str(" CLOSED");
        }
        result.push('\n');

        result.push_str(&format!(
            "  Reg. ends: {}\n",
            format_deadline(&record.reg_end_date)
        ));
        if let Some(ref link) = record.link {
            result.push_str(&format!("  Link: {}\n", link));
        }
        if let Some(ref themes) = record.themes {
            result.push_str(&format!("  Themes: {}\n", themes));
        }
        if !exclude_description {
            result.push_str(&format!(
                "  Description: {}\n",
                record.description_or_fallback()
            ));
        }
    }

    result
}

/// Format the filter bar: active category, urgency toggle, query and counts
pub fn format_filter_state(filter: &FilterState, visible: usize, listing: &EventListing) -> String {
    let bar: Vec<String> = KNOWN_CATEGORIES
        .iter()
        .map(|category| {
            let active =
                *category == filter.category || (category.is_all() && filter.category.is_all());
            if active {
                format!("[{}]", category.display_name())
            } else {
                category.display_name().to_string()
            }
        })
        .collect();

    let mut result = format!("Categories: {}\n", bar.join(" | "));
    if !filter.category.is_recognized() {
        result.push_str(&format!(
            "Custom category: [{}] (not in the filter bar)\n",
            filter.category
        ));
    }

    result.push_str(&format!(
        "Urgency (closing within {} days): {}\n",
        URGENCY_WINDOW_DAYS,
        if filter.urgency_only { "on" } else { "off" }
    ));

    if filter.search_query.is_empty() {
        result.push_str("Search: (none)\n");
    } else {
        result.push_str(&format!("Search: \"{}\"\n", filter.search_query));
    }

    result.push_str(&format!(
        "Showing {} of {} hackathon(s)\n",
        visible,
        listing.len()
    ));

    let labels = listing.labels();
    if !labels.is_empty() {
        result.push_str(&format!("Labels in listing: {}\n", labels.join(", ")));
    }

    result
}
