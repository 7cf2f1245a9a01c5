//! Listing data retrieval: the source seam, the mock catalog and unified search.

use futures::future::BoxFuture;

use crate::state::{ListingItem, ListingRequest};

mod catalog;
mod search;

pub use catalog::{CatalogOptions, MockCatalog, dummy_artists, dummy_events};
pub use search::{KNOWN_CATEGORIES, search_items};

/// What: Anything that can answer a listing request.
///
/// Details:
/// - Implementations may be slow; callers run them on background tasks.
/// - Failures are reported as displayable messages, matching how results
///   travel back to the screen.
pub trait ListingSource: Send + Sync {
    /// Fetch one page of rows for `request`, in the source's natural order.
    fn list(&self, request: ListingRequest) -> BoxFuture<'_, Result<Vec<ListingItem>, String>>;
}
