//! Service start/stop and failure reporting.

use std::sync::Arc;
use std::time::Duration;

use gigboard::app::ListingService;
use gigboard::state::{EntityKind, ViewStatus};

use crate::helpers::{FailingSource, ids, instant_catalog, settle, wire};

#[tokio::test]
/// What: Source failures surface as the error state and keep the last good list
async fn failure_keeps_previous_rows() {
    let (mut service, mut controller) =
        wire(Arc::new(instant_catalog()), EntityKind::Events, true);
    controller.open();
    settle(&mut service, &mut controller).await;
    let shown = ids(&controller);
    service.stop().await;

    let mut failing = ListingService::new(Arc::new(FailingSource), true);
    let mut retry = gigboard::app::ScreenController::new(controller.into_screen(), failing.start());
    retry.refresh();
    settle(&mut failing, &mut retry).await;
    assert_eq!(
        retry.status(),
        &ViewStatus::Error("catalog unreachable".to_string())
    );
    assert_eq!(ids(&retry), shown);
    failing.stop().await;
}

#[tokio::test]
/// What: After stop, dispatching reports a stopped service instead of spinning
async fn dispatch_after_stop_reports_error() {
    let (mut service, mut controller) =
        wire(Arc::new(instant_catalog()), EntityKind::Artists, true);
    service.stop().await;
    assert!(!service.is_running());
    assert!(!controller.refresh());
    assert!(matches!(controller.status(), ViewStatus::Error(_)));
    assert!(!controller.status().is_loading());
    let none = tokio::time::timeout(Duration::from_millis(100), service.next_results()).await;
    assert_eq!(none.ok().flatten().map(|r| r.id), None);
}
