//! Test utilities for common test setup.
//!
//! This module provides shared row builders used across multiple test modules.

use crate::state::{Artist, Event, ListingItem};

/// What: Build an artist row.
///
/// Inputs:
/// - `id`: Identifier (also used for the name `Artist {id}`)
/// - `category`: Primary category
/// - `rating`, `budget`: Optional numeric fields
///
/// Output: `ListingItem::Artist`
#[must_use]
pub fn artist(id: u64, category: &str, rating: Option<f64>, budget: Option<f64>) -> ListingItem {
    ListingItem::Artist(Artist {
        id,
        name: format!("Artist {id}"),
        average_rating: rating,
        primary_category: category.to_string(),
        budget,
        profile_picture: String::new(),
    })
}

/// What: Build an event row.
///
/// Inputs:
/// - `id`: Identifier (also used for the title `Event {id}`)
/// - `category`: Event category
/// - `popularity`, `budget`: Optional numeric fields
///
/// Output: `ListingItem::Event` without a date
#[must_use]
pub fn event(id: u64, category: &str, popularity: Option<f64>, budget: Option<f64>) -> ListingItem {
    ListingItem::Event(Event {
        id,
        title: format!("Event {id}"),
        category: category.to_string(),
        date: None,
        popularity,
        budget,
    })
}

/// Ids of `items` in order.
#[must_use]
pub fn ids(items: &[ListingItem]) -> Vec<u64> {
    items.iter().map(ListingItem::id).collect()
}
