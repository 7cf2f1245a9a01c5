//! Background listing runtime: channels, the fetch worker and result handling.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::ListingSource;
use crate::state::{ListingQuery, ListingResults};

mod channels;
mod handlers;
mod worker;

pub use handlers::handle_listing_results;
pub use worker::spawn_listing_worker;

use channels::Channels;

/// Owns the listing worker and both ends of its channels.
///
/// A screen sends queries through [`ListingService::sender`] and receives the
/// tagged results from [`ListingService::next_results`].
pub struct ListingService {
    source: Arc<dyn ListingSource>,
    cancel_superseded: bool,
    query_tx: Option<mpsc::UnboundedSender<ListingQuery>>,
    results_rx: Option<mpsc::UnboundedReceiver<ListingResults>>,
    worker: Option<JoinHandle<()>>,
}

impl ListingService {
    /// Service over `source`; nothing runs until [`ListingService::start`].
    #[must_use]
    pub fn new(source: Arc<dyn ListingSource>, cancel_superseded: bool) -> Self {
        Self {
            source,
            cancel_superseded,
            query_tx: None,
            results_rx: None,
            worker: None,
        }
    }

    /// What: Start the worker if it is not running yet.
    ///
    /// Output:
    /// - Query sender for the running worker. Calling `start` again returns a
    ///   sender to the same worker.
    pub fn start(&mut self) -> mpsc::UnboundedSender<ListingQuery> {
        if let Some(tx) = &self.query_tx {
            return tx.clone();
        }
        let Channels {
            query_tx,
            query_rx,
            results_tx,
            results_rx,
        } = Channels::new();
        self.worker = Some(spawn_listing_worker(
            Arc::clone(&self.source),
            query_rx,
            results_tx,
            self.cancel_superseded,
        ));
        self.results_rx = Some(results_rx);
        self.query_tx = Some(query_tx.clone());
        tracing::debug!(cancel_superseded = self.cancel_superseded, "listing service started");
        query_tx
    }

    /// Query sender, if the service is running.
    #[must_use]
    pub fn sender(&self) -> Option<mpsc::UnboundedSender<ListingQuery>> {
        self.query_tx.clone()
    }

    /// Whether the worker is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// What: Wait for the next tagged results.
    ///
    /// Output:
    /// - `None` when the service is stopped or the worker has exited.
    pub async fn next_results(&mut self) -> Option<ListingResults> {
        match self.results_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// What: Stop the worker and abort any fetch still running.
    ///
    /// Details:
    /// - Senders handed out earlier stay valid values but their sends fail,
    ///   which screens report as a stopped service.
    pub async fn stop(&mut self) {
        self.query_tx = None;
        self.results_rx = None;
        if let Some(worker) = self.worker.take() {
            worker.abort();
            if let Err(e) = worker.await
                && !e.is_cancelled()
            {
                tracing::warn!(error = %e, "listing worker ended abnormally");
            }
            tracing::debug!("listing service stopped");
        }
    }
}
