//! Request descriptors and client-side ordering seen through the service.

use std::sync::Arc;

use gigboard::logic::compose_request;
use gigboard::state::{EntityKind, FilterSet, SortField, SortOrder, ViewStatus};

use crate::helpers::{ids, instant_catalog, settle, wire};

#[test]
/// What: Descriptor JSON omits empty sections and keeps category order
fn descriptor_json_shape() {
    let empty = compose_request(EntityKind::Events, &FilterSet::new(), "   ", 0);
    assert_eq!(
        serde_json::to_string(&empty).expect("json"),
        r#"{"entity":"events","page":1}"#
    );
    let full = compose_request(
        EntityKind::Artists,
        &FilterSet::from_categories(["Dancer", "Singer", "Dancer"]),
        " bob ",
        2,
    );
    assert_eq!(
        serde_json::to_string(&full).expect("json"),
        r#"{"entity":"artists","filters":{"category":["Dancer","Singer"]},"query":"bob","page":2}"#
    );
}

#[tokio::test]
/// What: Selecting the same sort field twice lists events by date descending
async fn events_by_date_descending() {
    let (mut service, mut controller) =
        wire(Arc::new(instant_catalog()), EntityKind::Events, true);
    controller.select_sort_field(SortField::Date);
    controller.select_sort_field(SortField::Date);
    assert_eq!(controller.screen().sort.order, SortOrder::Desc);
    settle(&mut service, &mut controller).await;
    assert_eq!(ids(&controller), vec![4, 3, 2, 1]);
    service.stop().await;
}

#[tokio::test]
/// What: Budget ascending over the first artists page, then the next page merges in order
async fn artists_by_budget_across_pages() {
    let (mut service, mut controller) =
        wire(Arc::new(instant_catalog()), EntityKind::Artists, true);
    controller.select_sort_field(SortField::Budget);
    settle(&mut service, &mut controller).await;
    assert_eq!(ids(&controller), vec![1, 5, 2, 4, 6, 3]);
    assert!(controller.screen().has_more);

    assert!(controller.load_more());
    settle(&mut service, &mut controller).await;
    assert_eq!(ids(&controller), vec![1, 7, 5, 11, 2, 8, 4, 10, 6, 12, 3, 9]);

    assert!(controller.load_more());
    settle(&mut service, &mut controller).await;
    assert_eq!(controller.screen().items.len(), 12);
    assert!(!controller.load_more());
    service.stop().await;
}

#[tokio::test]
/// What: A search with no matches yields the empty state
async fn search_without_matches_is_empty() {
    let (mut service, mut controller) =
        wire(Arc::new(instant_catalog()), EntityKind::Events, true);
    controller.set_search_query("zzz-no-such-event");
    controller.submit_search();
    settle(&mut service, &mut controller).await;
    assert_eq!(controller.status(), &ViewStatus::Empty);
    service.stop().await;
}
