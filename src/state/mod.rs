//! Listing state: value types, filter selection, picker drafts and screen state.

pub mod filter_set;
pub mod modal;
pub mod screen;
pub mod types;

// Public re-exports so callers can use `crate::state::*`
pub use filter_set::FilterSet;
pub use modal::{FilterDraft, Modal, SortDraft};
pub use screen::ScreenState;
pub use types::{
    Artist, EntityKind, Event, ListingFilters, ListingItem, ListingQuery, ListingRequest,
    ListingResults, SearchHit, SortField, SortOrder, SortSpec, ViewStatus,
};
