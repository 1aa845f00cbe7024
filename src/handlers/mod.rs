//! MCP tool handlers for the listing server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod filters;
pub mod list;
pub mod reset_filters;
pub mod search;
pub mod set_category;
pub mod set_urgency;

use crate::listing::{ListingView, utc_now};

/// Count line appended to every filter change response
pub(crate) fn visible_summary(view: &ListingView) -> String {
    format!(
        "Showing {} of {} hackathon(s).",
        view.visible(utc_now()).len(),
        view.listing().len()
    )
}
