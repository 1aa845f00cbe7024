//! Hackathon listing domain model and filtering
//!
//! This module contains the listing data structures and the filter engine.
//! It is split into submodules:
//! - `event`: A single hackathon record
//! - `deadline`: Registration deadline parsing
//! - `category`: Category selections (platforms and attendance modes)
//! - `filter_state`: The user's filter selections
//! - `evaluator`: Pure predicate evaluation over a listing
//! - `listing_data`: The loaded record set
//! - `view`: A listing together with its filter state

mod category;
mod deadline;
pub mod evaluator;
mod event;
mod filter_state;
mod listing_data;
mod view;

// Re-export all public types
pub use category::{Category, KNOWN_CATEGORIES};
pub use deadline::Deadline;
pub use evaluator::{URGENCY_WINDOW_DAYS, evaluate};
pub use event::{DESCRIPTION_FALLBACK, EventRecord, MODE_FALLBACK, utc_now};
pub use filter_state::FilterState;
pub use listing_data::{EventListing, FORMAT_VERSION};
pub use view::ListingView;
