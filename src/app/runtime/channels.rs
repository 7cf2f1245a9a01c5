use tokio::sync::mpsc;

use crate::state::{ListingQuery, ListingResults};

/// What: Channel pairs connecting a screen to the listing worker.
///
/// Details:
/// - Queries flow screen → worker, tagged results flow worker → screen.
pub(crate) struct Channels {
    pub query_tx: mpsc::UnboundedSender<ListingQuery>,
    pub query_rx: mpsc::UnboundedReceiver<ListingQuery>,
    pub results_tx: mpsc::UnboundedSender<ListingResults>,
    pub results_rx: mpsc::UnboundedReceiver<ListingResults>,
}

impl Channels {
    /// What: Create both unbounded channel pairs.
    pub(crate) fn new() -> Self {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            query_tx,
            query_rx,
            results_tx,
            results_rx,
        }
    }
}
