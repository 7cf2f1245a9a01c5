use tokio::sync::mpsc;

use crate::app::runtime::handle_listing_results;
use crate::logic::send_query;
use crate::state::{
    FilterSet, ListingQuery, ListingResults, Modal, ScreenState, SortField, SortSpec, ViewStatus,
};

/// What: One listing screen wired to the listing worker.
///
/// Details:
/// - Every user action mutates the screen and, when the list must change,
///   dispatches exactly one query. Callers never dispatch by hand.
/// - Methods return whether a query was dispatched.
pub struct ScreenController {
    screen: ScreenState,
    query_tx: mpsc::UnboundedSender<ListingQuery>,
}

impl ScreenController {
    /// Controller over `screen`, sending queries to `query_tx`.
    #[must_use]
    pub const fn new(screen: ScreenState, query_tx: mpsc::UnboundedSender<ListingQuery>) -> Self {
        Self { screen, query_tx }
    }

    /// Read-only view of the screen.
    #[must_use]
    pub const fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// Committed category filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.screen.filters
    }

    /// Current list status.
    #[must_use]
    pub const fn status(&self) -> &ViewStatus {
        &self.screen.status
    }

    /// Screen became visible: load its first page.
    pub fn open(&mut self) -> bool {
        self.screen.refresh();
        self.dispatch()
    }

    /// Trending chip pressed.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.screen.toggle_category(category);
        self.dispatch()
    }

    /// Replace the category selection.
    pub fn set_categories<I, S>(&mut self, categories: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.screen.set_categories(categories);
        self.dispatch()
    }

    /// Sort option chosen; the same field again flips the order.
    pub fn select_sort_field(&mut self, field: SortField) -> bool {
        self.screen.select_sort_field(field);
        self.dispatch()
    }

    /// Replace the sort selection.
    pub fn set_sort(&mut self, sort: SortSpec) -> bool {
        self.screen.set_sort(sort);
        self.dispatch()
    }

    /// Search box edited. Never dispatches.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.screen.set_search_query(text);
    }

    /// Search submitted.
    pub fn submit_search(&mut self) -> bool {
        self.screen.submit_search();
        self.dispatch()
    }

    /// Pull-to-refresh or retry.
    pub fn refresh(&mut self) -> bool {
        self.screen.refresh();
        self.dispatch()
    }

    /// End of list reached; fetches the next page when one is expected.
    pub fn load_more(&mut self) -> bool {
        self.screen.load_more() && self.dispatch()
    }

    /// Open the filter picker.
    pub fn open_filter_picker(&mut self) {
        self.screen.open_filter_picker();
    }

    /// Open the sort picker.
    pub fn open_sort_picker(&mut self) {
        self.screen.open_sort_picker();
    }

    /// Toggle a category in the open filter picker's draft.
    pub fn toggle_draft_category(&mut self, category: &str) {
        if let Modal::Filter(draft) = &mut self.screen.modal {
            draft.toggle(category);
        }
    }

    /// Select a field in the open sort picker's draft.
    pub fn select_draft_sort(&mut self, field: SortField) {
        if let Modal::Sort(draft) = &mut self.screen.modal {
            draft.select(field);
        }
    }

    /// Cancel the open picker. Never dispatches.
    pub fn close_modal(&mut self) {
        self.screen.close_modal();
    }

    /// Apply the open picker's draft.
    pub fn apply_modal(&mut self) -> bool {
        self.screen.apply_modal() && self.dispatch()
    }

    /// Feed tagged results from the worker; returns whether the screen changed.
    pub fn handle_results(&mut self, results: ListingResults) -> bool {
        handle_listing_results(&mut self.screen, results)
    }

    /// Give the screen back, e.g. after the service stopped.
    #[must_use]
    pub fn into_screen(self) -> ScreenState {
        self.screen
    }

    fn dispatch(&mut self) -> bool {
        send_query(&mut self.screen, &self.query_tx)
    }
}
