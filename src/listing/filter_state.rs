use super::category::Category;

/// The user's current filter selections
///
/// Every field has a default, and the default state shows the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Platform or attendance-mode category
    pub category: Category,
    /// Only show events whose registration closes within the urgency window
    pub urgency_only: bool,
    /// Free-text query; empty disables search
    pub search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no criterion is active
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
