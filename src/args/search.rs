//! Command-line unified search.

use gigboard::config::Settings;
use gigboard::sources::{CatalogOptions, MockCatalog};

use crate::args::render;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Search artists, events and categories and render the hits.
///
/// Inputs:
/// - `text`: Search text
/// - `json`: Print JSON instead of tagged lines
/// - `settings`: Loaded settings (latency, sample catalog options)
///
/// Output:
/// - Rendered hits.
///
/// # Errors
/// - Returns the serializer error in JSON mode.
pub async fn run_search(text: &str, json: bool, settings: &Settings) -> Result<String> {
    tracing::info!(query = %text, "search requested from CLI");
    let catalog = MockCatalog::new(CatalogOptions::from(settings));
    let hits = catalog.search(text).await;
    tracing::info!(hits = hits.len(), "search complete");
    if json {
        render::items_json(&hits)
    } else {
        Ok(render::search_lines(&hits))
    }
}
