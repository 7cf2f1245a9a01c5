//! Shared fixtures for pipeline tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use gigboard::app::{ListingService, ScreenController};
use gigboard::sources::{CatalogOptions, ListingSource, MockCatalog};
use gigboard::state::{EntityKind, ListingItem, ListingRequest, ScreenState};

/// Catalog with no simulated latency.
pub fn instant_catalog() -> MockCatalog {
    MockCatalog::new(CatalogOptions {
        latency: Duration::ZERO,
        ..CatalogOptions::default()
    })
}

/// What: Source whose latency depends on the requested categories.
///
/// Details:
/// - Lets a test make an earlier request finish after a later one.
pub struct ScriptedSource {
    pub inner: MockCatalog,
    pub delays: HashMap<Option<Vec<String>>, Duration>,
}

impl ListingSource for ScriptedSource {
    fn list(&self, request: ListingRequest) -> BoxFuture<'_, Result<Vec<ListingItem>, String>> {
        let key = request.filters.as_ref().map(|f| f.category.clone());
        let delay = self.delays.get(&key).copied().unwrap_or_default();
        async move {
            tokio::time::sleep(delay).await;
            Ok(self.inner.list_now(&request))
        }
        .boxed()
    }
}

/// Source that always fails.
pub struct FailingSource;

impl ListingSource for FailingSource {
    fn list(&self, _request: ListingRequest) -> BoxFuture<'_, Result<Vec<ListingItem>, String>> {
        async { Err("catalog unreachable".to_string()) }.boxed()
    }
}

/// Start a service over `source` and a controller for `kind` wired to it.
pub fn wire(
    source: Arc<dyn ListingSource>,
    kind: EntityKind,
    cancel_superseded: bool,
) -> (ListingService, ScreenController) {
    let mut service = ListingService::new(source, cancel_superseded);
    let tx = service.start();
    let controller = ScreenController::new(ScreenState::new(kind, kind.default_page_size()), tx);
    (service, controller)
}

/// Feed results until the latest query has answered, with a timeout guard.
pub async fn settle(service: &mut ListingService, controller: &mut ScreenController) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while controller.status().is_loading() {
            let results = service.next_results().await.expect("service running");
            controller.handle_results(results);
        }
    })
    .await
    .expect("screen settles");
}

/// Ids of the displayed rows.
pub fn ids(controller: &ScreenController) -> Vec<u64> {
    controller.screen().items.iter().map(ListingItem::id).collect()
}
