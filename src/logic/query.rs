use tokio::sync::mpsc;

use crate::state::{EntityKind, FilterSet, ListingQuery, ListingRequest, ScreenState, ViewStatus};

/// What: Merge filter, search text and page into one request descriptor.
///
/// Inputs:
/// - `entity`: Listing to query
/// - `filters`: Committed category selection
/// - `search`: Raw search box text
/// - `page`: Requested page (1-indexed)
///
/// Output:
/// - `ListingRequest` with `filters` omitted when no category is selected,
///   `query` omitted when the text is blank, and `page` at least 1.
///
/// Details:
/// - Pure: equal inputs always yield equal descriptors.
/// - Sort is not part of the descriptor. Results are ordered on arrival with
///   the screen's current `SortSpec`; every sort change issues a new query id,
///   so rows are never presented under a sort older than the latest query.
#[must_use]
pub fn compose_request(
    entity: EntityKind,
    filters: &FilterSet,
    search: &str,
    page: u32,
) -> ListingRequest {
    let trimmed = search.trim();
    ListingRequest {
        entity,
        filters: filters.to_filters(),
        query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        page: page.max(1),
    }
}

/// What: Send the screen's current query over the listing channel with a fresh id.
///
/// Inputs:
/// - `screen`: Mutable screen state; updates `next_query_id`, `latest_query_id` and `status`
/// - `query_tx`: Channel to the listing worker
///
/// Output:
/// - `true` when the query was handed to the worker. `false` when the worker is
///   gone; the screen then shows an error instead of spinning forever.
///
/// Details:
/// - The id allows correlating responses so the screen can discard stale results.
pub fn send_query(
    screen: &mut ScreenState,
    query_tx: &mpsc::UnboundedSender<ListingQuery>,
) -> bool {
    let id = screen.next_query_id;
    screen.next_query_id += 1;
    screen.latest_query_id = id;
    let request = compose_request(
        screen.kind,
        &screen.filters,
        &screen.search_query,
        screen.page,
    );
    tracing::debug!(
        id,
        entity = screen.kind.label(),
        page = request.page,
        categories = screen.filters.len(),
        has_query = request.query.is_some(),
        "dispatching listing query"
    );
    screen.status = ViewStatus::Loading;
    if query_tx.send(ListingQuery { id, request }).is_err() {
        tracing::warn!(id, "listing worker is not running; query dropped");
        screen.status = ViewStatus::Error("listing service is not running".to_string());
        return false;
    }
    true
}
