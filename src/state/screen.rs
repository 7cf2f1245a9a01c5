//! Per-screen listing state: the single writer of filter, sort, search and page.

use crate::state::filter_set::FilterSet;
use crate::state::modal::{FilterDraft, Modal, SortDraft};
use crate::state::types::{EntityKind, ListingItem, SortField, SortSpec, ViewStatus};

/// State owned by one Artists or Events screen.
///
/// Mutators never fetch on their own. Those that change what the list should
/// show reset paging and return `true`; the caller then dispatches a query
/// with [`crate::logic::send_query`].
#[derive(Clone, Debug)]
pub struct ScreenState {
    /// Listing this screen browses.
    pub kind: EntityKind,
    /// Committed category filters.
    pub filters: FilterSet,
    /// Committed sort selection.
    pub sort: SortSpec,
    /// Current search box text.
    pub search_query: String,
    /// Page that the next (or in-flight) request targets, 1-indexed.
    pub page: u32,
    /// Rows per page the catalog returns for this listing.
    pub page_size: usize,
    /// Rows currently displayed, already sorted.
    pub items: Vec<ListingItem>,
    /// What the list area should show.
    pub status: ViewStatus,
    /// Whether the last page came back full.
    pub has_more: bool,
    /// Open picker, if any.
    pub modal: Modal,
    /// Id to hand out to the next query.
    pub next_query_id: u64,
    /// Id of the most recently issued query; only its results are shown.
    pub latest_query_id: u64,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(EntityKind::Artists, EntityKind::Artists.default_page_size())
    }
}

impl ScreenState {
    /// Fresh screen with no filters, unsorted, on page 1.
    #[must_use]
    pub const fn new(kind: EntityKind, page_size: usize) -> Self {
        Self {
            kind,
            filters: FilterSet::new(),
            sort: SortSpec {
                field: None,
                order: crate::state::types::SortOrder::Asc,
            },
            search_query: String::new(),
            page: 1,
            page_size,
            items: Vec::new(),
            status: ViewStatus::Idle,
            has_more: false,
            modal: Modal::None,
            next_query_id: 1,
            latest_query_id: 0,
        }
    }

    /// Screen opened from a category shortcut, pre-filtered to that category.
    #[must_use]
    pub fn with_initial_category(kind: EntityKind, page_size: usize, category: &str) -> Self {
        let mut screen = Self::new(kind, page_size);
        screen.filters.toggle(category);
        screen
    }

    /// Whether the pull-to-refresh indicator should spin.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.status.is_loading()
    }

    /// Toggle a category (trending chip). Always requires a refetch.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.filters.toggle(category);
        self.reset_paging()
    }

    /// Replace the category selection. Always requires a refetch.
    pub fn set_categories<I, S>(&mut self, categories: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.set(categories);
        self.reset_paging()
    }

    /// Replace the sort selection. Always requires a refetch.
    pub fn set_sort(&mut self, sort: SortSpec) -> bool {
        self.sort = sort;
        self.reset_paging()
    }

    /// Select a sort field directly (same field flips). Always requires a refetch.
    pub fn select_sort_field(&mut self, field: SortField) -> bool {
        self.sort.select_field(field);
        self.reset_paging()
    }

    /// Update the search box text without fetching.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Submit the search box. Always requires a refetch.
    pub fn submit_search(&mut self) -> bool {
        self.reset_paging()
    }

    /// Pull-to-refresh or retry after an error. Always requires a refetch.
    pub fn refresh(&mut self) -> bool {
        self.reset_paging()
    }

    /// What: Advance to the next page when the list reached its end.
    ///
    /// Output:
    /// - `true` when a fetch for the next page is needed; `false` while a
    ///   request is in flight or when the last page was not full.
    pub fn load_more(&mut self) -> bool {
        if self.status.is_loading() || !self.has_more {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    /// Open the filter picker over the committed selection.
    pub fn open_filter_picker(&mut self) {
        self.modal = Modal::Filter(FilterDraft::open(&self.filters, self.kind));
    }

    /// Open the sort picker over the committed sort.
    pub fn open_sort_picker(&mut self) {
        self.modal = Modal::Sort(SortDraft::open(self.sort, self.kind));
    }

    /// Close the open picker and discard its draft.
    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// What: Commit the open picker's draft.
    ///
    /// Output:
    /// - `true` when a draft was committed (refetch needed); `false` when no
    ///   picker was open.
    pub fn apply_modal(&mut self) -> bool {
        match std::mem::take(&mut self.modal) {
            Modal::None => false,
            Modal::Filter(draft) => {
                self.filters = draft.apply();
                self.reset_paging()
            }
            Modal::Sort(draft) => {
                self.sort = draft.apply();
                self.reset_paging()
            }
        }
    }

    fn reset_paging(&mut self) -> bool {
        self.page = 1;
        true
    }
}
