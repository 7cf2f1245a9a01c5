use crate::logic::present;
use crate::state::{ListingResults, ScreenState, ViewStatus};

/// What: Apply listing results to the screen if they answer the latest query.
///
/// Inputs:
/// - `screen`: Screen state to update
/// - `results`: Tagged results from the listing worker
///
/// Output:
/// - `true` when the screen changed; `false` when the results were stale.
///
/// Details:
/// - Page 1 replaces the list, later pages append to it. The combined list is
///   then ordered with the screen's current sort.
/// - A failure keeps the previously displayed rows and shows the error. A
///   failed next page rolls the page counter back so the user can retry.
/// - A failed first page clears `has_more`: the rows on screen belong to an
///   earlier query, so paging must wait for a successful refresh.
pub fn handle_listing_results(screen: &mut ScreenState, results: ListingResults) -> bool {
    if results.id != screen.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = screen.latest_query_id,
            "dropping stale listing results"
        );
        return false;
    }
    match results.outcome {
        Ok(batch) => {
            screen.has_more = screen.page_size > 0 && batch.len() >= screen.page_size;
            let mut combined = if results.page > 1 {
                std::mem::take(&mut screen.items)
            } else {
                Vec::with_capacity(batch.len())
            };
            combined.extend(batch);
            screen.items = present(combined, &screen.sort);
            screen.status = if screen.items.is_empty() {
                ViewStatus::Empty
            } else {
                ViewStatus::Ready
            };
        }
        Err(e) => {
            tracing::warn!(
                id = results.id,
                page = results.page,
                error = %e,
                "listing request failed"
            );
            if results.page > 1 {
                screen.page = results.page - 1;
            } else {
                screen.has_more = false;
            }
            screen.status = ViewStatus::Error(e);
        }
    }
    true
}
