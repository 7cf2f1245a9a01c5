//! Out-of-order responses never overwrite the latest query's results.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use gigboard::sources::{CatalogOptions, MockCatalog};
use gigboard::state::{EntityKind, ViewStatus};

use crate::helpers::{ScriptedSource, ids, instant_catalog, settle, wire};

fn slow_unfiltered() -> Arc<ScriptedSource> {
    let mut delays = HashMap::new();
    delays.insert(None, Duration::from_millis(150));
    delays.insert(Some(vec!["Dancer".to_string()]), Duration::from_millis(10));
    Arc::new(ScriptedSource {
        inner: instant_catalog(),
        delays,
    })
}

#[tokio::test]
/// What: A slow first response arriving after a fast second one is discarded
///
/// Inputs:
/// - Unfiltered query (150ms) then a Dancer query (10ms), no cancellation
///
/// Output:
/// - Both responses arrive, second first; the screen shows only Dancers
async fn late_first_response_is_discarded() {
    let (mut service, mut controller) = wire(slow_unfiltered(), EntityKind::Artists, false);
    controller.open();
    controller.toggle_category("Dancer");

    let mut applied = Vec::new();
    for _ in 0..2 {
        let results = tokio::time::timeout(Duration::from_secs(2), service.next_results())
            .await
            .ok()
            .flatten()
            .expect("results");
        applied.push((results.id, controller.handle_results(results)));
    }
    assert_eq!(applied, vec![(2, true), (1, false)]);
    assert_eq!(ids(&controller), vec![2, 8]);
    assert_eq!(controller.status(), &ViewStatus::Ready);
    service.stop().await;
}

#[tokio::test]
/// What: With cancellation on, the superseded fetch never reports at all
async fn superseded_fetch_never_reports_when_cancelled() {
    let (mut service, mut controller) = wire(slow_unfiltered(), EntityKind::Artists, true);
    controller.open();
    tokio::time::sleep(Duration::from_millis(5)).await;
    controller.toggle_category("Dancer");
    settle(&mut service, &mut controller).await;
    assert_eq!(ids(&controller), vec![2, 8]);
    let extra = tokio::time::timeout(Duration::from_millis(250), service.next_results()).await;
    assert!(extra.is_err(), "no further results expected");
    service.stop().await;
}

#[tokio::test]
/// What: Rapid chip toggles under random latency settle on the final selection
///
/// Inputs:
/// - Five toggles ending with only "Pianist" selected; jittered latency
///
/// Output:
/// - The displayed rows are exactly the Pianists
async fn rapid_toggles_settle_on_final_selection() {
    let catalog = MockCatalog::new(CatalogOptions {
        latency: Duration::from_millis(5),
        jitter: Duration::from_millis(40),
        ..CatalogOptions::default()
    });
    let (mut service, mut controller) = wire(Arc::new(catalog), EntityKind::Artists, false);
    for category in ["Singer", "Dancer", "Singer", "Pianist", "Dancer"] {
        assert!(controller.toggle_category(category));
    }
    assert_eq!(controller.filters().as_slice(), ["Pianist".to_string()]);
    settle(&mut service, &mut controller).await;
    assert_eq!(ids(&controller), vec![4, 10]);
    assert_eq!(controller.screen().latest_query_id, 5);
    service.stop().await;
}
