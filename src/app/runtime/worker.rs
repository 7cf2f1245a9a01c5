use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle, JoinSet};

use crate::sources::ListingSource;
use crate::state::{ListingQuery, ListingResults};

/// What: Spawn the background worker for listing queries.
///
/// Inputs:
/// - `source`: Listing source answering the requests
/// - `query_rx`: Channel receiver for listing queries
/// - `results_tx`: Channel sender for tagged results
/// - `cancel_superseded`: Abort the previous in-flight fetch when a newer query arrives
///
/// Output:
/// - Handle of the receiving loop. It ends once every query sender is dropped
///   and the remaining fetches have reported.
///
/// Details:
/// - Each query runs on its own task, so fetches overlap and may finish out of
///   order. Results echo the query id; the screen keeps only the latest.
/// - Aborting the returned handle also aborts every fetch still running.
pub fn spawn_listing_worker(
    source: Arc<dyn ListingSource>,
    mut query_rx: mpsc::UnboundedReceiver<ListingQuery>,
    results_tx: mpsc::UnboundedSender<ListingResults>,
    cancel_superseded: bool,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut fetches: JoinSet<()> = JoinSet::new();
        let mut in_flight: Option<(u64, AbortHandle)> = None;
        while let Some(query) = query_rx.recv().await {
            while fetches.try_join_next().is_some() {}
            if cancel_superseded
                && let Some((prev_id, prev)) = in_flight.take()
                && !prev.is_finished()
            {
                prev.abort();
                tracing::debug!(
                    superseded = prev_id,
                    by = query.id,
                    "aborted superseded listing fetch"
                );
            }
            let id = query.id;
            let src = Arc::clone(&source);
            let tx = results_tx.clone();
            let handle = fetches.spawn(async move {
                let ListingQuery { id, request } = query;
                let page = request.page;
                let entity = request.entity.label();
                let outcome = src.list(request).await;
                match &outcome {
                    Ok(items) => {
                        tracing::info!(id, entity, page, count = items.len(), "listing fetched");
                    }
                    Err(e) => tracing::warn!(id, entity, page, error = %e, "listing fetch failed"),
                }
                if tx.send(ListingResults { id, page, outcome }).is_err() {
                    tracing::debug!(id, "listing results receiver dropped");
                }
            });
            in_flight = Some((id, handle));
        }
        while fetches.join_next().await.is_some() {}
        tracing::debug!("listing worker exiting");
    })
}
