use crate::state::{Artist, Event, SearchHit};

/// Category names the search box can suggest.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Singer",
    "Dancer",
    "Guitarist",
    "Pianist",
    "Drummer",
    "Violinist",
];

/// What: Search artists, events and category names at once.
///
/// Inputs:
/// - `artists`, `events`: Records to search
/// - `query`: Raw search text
///
/// Output:
/// - Artists whose name or category contains the query, then events whose
///   title or category does, then matching category names. Case-insensitive.
///
/// Details:
/// - A blank query returns no hits.
#[must_use]
pub fn search_items(artists: &[Artist], events: &[Event], query: &str) -> Vec<SearchHit> {
    let ql = query.trim().to_lowercase();
    if ql.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<SearchHit> = artists
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&ql) || a.primary_category.to_lowercase().contains(&ql)
        })
        .cloned()
        .map(SearchHit::Artist)
        .collect();
    hits.extend(
        events
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&ql) || e.category.to_lowercase().contains(&ql)
            })
            .cloned()
            .map(SearchHit::Event),
    );
    hits.extend(
        KNOWN_CATEGORIES
            .iter()
            .filter(|c| c.to_lowercase().contains(&ql))
            .map(|c| SearchHit::Category {
                name: (*c).to_string(),
            }),
    );
    hits
}
