use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::ListingSource;
use crate::config::Settings;
use crate::state::{Artist, EntityKind, Event, ListingItem, ListingRequest, SearchHit};

/// Tunables for [`MockCatalog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Rows per artists page.
    pub artists_page_size: usize,
    /// Rows per events page.
    pub events_page_size: usize,
    /// Fixed simulated latency.
    pub latency: Duration,
    /// Upper bound of random extra latency.
    pub jitter: Duration,
    /// Fuzzy instead of substring search matching.
    pub search_fuzzy: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            artists_page_size: EntityKind::Artists.default_page_size(),
            events_page_size: EntityKind::Events.default_page_size(),
            latency: Duration::from_millis(500),
            jitter: Duration::ZERO,
            search_fuzzy: false,
        }
    }
}

impl From<&Settings> for CatalogOptions {
    fn from(s: &Settings) -> Self {
        Self {
            artists_page_size: s.artists_page_size,
            events_page_size: s.events_page_size,
            latency: Duration::from_millis(s.latency_ms),
            jitter: Duration::from_millis(s.latency_jitter_ms),
            search_fuzzy: s.search_fuzzy,
        }
    }
}

impl CatalogOptions {
    /// Page size for `kind`.
    #[must_use]
    pub const fn page_size(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Artists => self.artists_page_size,
            EntityKind::Events => self.events_page_size,
        }
    }
}

/// In-memory stand-in for the marketplace backend.
///
/// Serves static artists and events with simulated network latency.
#[derive(Clone, Debug)]
pub struct MockCatalog {
    artists: Vec<Artist>,
    events: Vec<Event>,
    options: CatalogOptions,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(CatalogOptions::default())
    }
}

impl MockCatalog {
    /// Catalog over the built-in sample data.
    #[must_use]
    pub fn new(options: CatalogOptions) -> Self {
        Self::with_data(dummy_artists(), dummy_events(), options)
    }

    /// Catalog over caller-provided data.
    #[must_use]
    pub const fn with_data(
        artists: Vec<Artist>,
        events: Vec<Event>,
        options: CatalogOptions,
    ) -> Self {
        Self {
            artists,
            events,
            options,
        }
    }

    /// Active options.
    #[must_use]
    pub const fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// What: Answer a listing request without simulated latency.
    ///
    /// Inputs:
    /// - `request`: Request descriptor
    ///
    /// Output:
    /// - Matching rows for the requested page in catalog order; empty past the end.
    ///
    /// Details:
    /// - Category matching ignores case for both listings.
    /// - Page `n` covers rows `(n-1)*size .. n*size` of the filtered set.
    #[must_use]
    pub fn list_now(&self, request: &ListingRequest) -> Vec<ListingItem> {
        let mut items: Vec<ListingItem> = match request.entity {
            EntityKind::Artists => self
                .artists
                .iter()
                .cloned()
                .map(ListingItem::Artist)
                .collect(),
            EntityKind::Events => self.events.iter().cloned().map(ListingItem::Event).collect(),
        };
        crate::logic::retain_matching(
            &mut items,
            request.filters.as_ref(),
            request.query.as_deref(),
            self.options.search_fuzzy,
        );
        let size = self.options.page_size(request.entity);
        let page = usize::try_from(request.page.max(1)).unwrap_or(usize::MAX);
        let start = (page - 1).saturating_mul(size);
        items.into_iter().skip(start).take(size).collect()
    }

    /// Unified search across artists, events and categories, with latency.
    pub async fn search(&self, query: &str) -> Vec<SearchHit> {
        self.simulate_latency().await;
        super::search_items(&self.artists, &self.events, query)
    }

    async fn simulate_latency(&self) {
        let jitter_ms = u64::try_from(self.options.jitter.as_millis()).unwrap_or(u64::MAX);
        let extra = if jitter_ms > 0 {
            Duration::from_millis(rand::random_range(0..=jitter_ms))
        } else {
            Duration::ZERO
        };
        let delay = self.options.latency + extra;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl ListingSource for MockCatalog {
    fn list(&self, request: ListingRequest) -> BoxFuture<'_, Result<Vec<ListingItem>, String>> {
        async move {
            self.simulate_latency().await;
            let items = self.list_now(&request);
            tracing::debug!(
                entity = request.entity.label(),
                page = request.page,
                count = items.len(),
                "mock catalog answered"
            );
            Ok(items)
        }
        .boxed()
    }
}

/// Built-in artist sample data.
#[must_use]
pub fn dummy_artists() -> Vec<Artist> {
    let base: [(&str, f64, &str, f64); 6] = [
        ("Alice dravid munitr kadkam", 4.5, "Singer", 100.0),
        ("Bob", 4.2, "Dancer", 120.0),
        ("Charlie", 4.8, "Guitarist", 150.0),
        ("Diana", 4.6, "Pianist", 130.0),
        ("Evan", 4.1, "Drummer", 110.0),
        ("Fiona", 4.9, "Violinist", 140.0),
    ];
    base.iter()
        .cycle()
        .take(12)
        .zip(1_u64..)
        .map(|(&(name, rating, category, budget), id)| Artist {
            id,
            name: name.to_string(),
            average_rating: Some(rating),
            primary_category: category.to_string(),
            budget: Some(budget),
            profile_picture: "https://via.placeholder.com/150".to_string(),
        })
        .collect()
}

/// Built-in event sample data.
#[must_use]
pub fn dummy_events() -> Vec<Event> {
    let rows: [(&str, &str, i64, f64, f64); 4] = [
        ("Concert A", "Concert", 1_640_995_200, 80.0, 500.0),
        ("Workshop B", "Workshop", 1_641_081_600, 60.0, 300.0),
        ("Conference C", "Conference", 1_641_168_000, 90.0, 700.0),
        ("Exhibition D", "Exhibition", 1_641_254_400, 50.0, 200.0),
    ];
    rows.iter()
        .zip(1_u64..)
        .map(|(&(title, category, date, popularity, budget), id)| Event {
            id,
            title: title.to_string(),
            category: category.to_string(),
            date: Some(date),
            popularity: Some(popularity),
            budget: Some(budget),
        })
        .collect()
}
