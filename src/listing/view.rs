use super::category::Category;
use super::evaluator;
use super::event::EventRecord;
use super::filter_state::FilterState;
use super::listing_data::EventListing;
use chrono::{DateTime, Utc};

/// One page view: the loaded listing plus the filter selections applied to it
///
/// The view owns its `FilterState` and exposes one setter per field. The
/// visible subset is never stored; every call to `visible` derives it again
/// from the listing and the current state, so a read always reflects the
/// latest selections.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    listing: EventListing,
    filter: FilterState,
}

impl ListingView {
    /// Create a view over `listing` with default filters
    pub fn new(listing: EventListing) -> Self {
        Self {
            listing,
            filter: FilterState::default(),
        }
    }

    pub fn listing(&self) -> &EventListing {
        &self.listing
    }

    /// Current filter selections
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Replace the category selection
    pub fn set_category(&mut self, category: impl Into<Category>) {
        self.filter.category = category.into();
    }

    /// Replace the urgency toggle
    pub fn set_urgency(&mut self, urgency_only: bool) {
        self.filter.urgency_only = urgency_only;
    }

    /// Replace the search query (not trimmed)
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    /// Restore every selection to its default
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Records passing the current filters as of `now`, in listing order
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&EventRecord> {
        evaluator::evaluate(self.listing.events(), &self.filter, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Deadline;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap()
    }

    fn view() -> ListingView {
        ListingView::new(EventListing::from_events(vec![
            EventRecord {
                id: "1".to_string(),
                title: "AI Sprint".to_string(),
                source: Some("MLH".to_string()),
                mode: Some("Online".to_string()),
                reg_end_date: Deadline::At(now() + Duration::days(2)),
                ..Default::default()
            },
            EventRecord {
                id: "2".to_string(),
                title: "Web3 Jam".to_string(),
                source: Some("Devpost".to_string()),
                mode: Some("In-Person".to_string()),
                reg_end_date: Deadline::At(now() + Duration::days(20)),
                ..Default::default()
            },
        ]))
    }

    #[test]
    fn test_setters_replace_one_field() {
        let mut view = view();
        view.set_category("Online");
        view.set_urgency(true);
        view.set_search_query("sprint");
        assert_eq!(
            view.filter(),
            &FilterState {
                category: Category::Online,
                urgency_only: true,
                search_query: "sprint".to_string(),
            }
        );

        view.set_urgency(false);
        assert_eq!(view.filter().category, Category::Online);
        assert_eq!(view.filter().search_query, "sprint");
        assert!(!view.filter().urgency_only);
    }

    #[test]
    fn test_reset_filters() {
        let mut view = view();
        view.set_category(Category::Mlh);
        view.set_search_query("x");
        view.reset_filters();
        assert!(view.filter().is_default());
        assert_eq!(view.visible(now()).len(), 2);
    }

    #[test]
    fn test_visible_follows_latest_state() {
        let mut view = view();
        view.set_search_query("jam");
        assert_eq!(view.visible(now())[0].id, "2");
        view.set_search_query("");
        view.set_urgency(true);
        let visible = view.visible(now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_visible_depends_on_evaluation_instant() {
        let mut view = view();
        view.set_urgency(true);
        assert_eq!(view.visible(now()).len(), 1);
        assert_eq!(view.visible(now() + Duration::days(14)).len(), 1);
        assert_eq!(view.visible(now() + Duration::days(14))[0].id, "2");
        assert!(view.visible(now() + Duration::days(30)).is_empty());
    }
}
