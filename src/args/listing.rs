//! Command-line listing mode: one screen driven through the listing service.

use std::sync::Arc;

use gigboard::app::{ListingService, ScreenController};
use gigboard::config::Settings;
use gigboard::sources::{CatalogOptions, MockCatalog};
use gigboard::state::{
    EntityKind, FilterSet, ScreenState, SortField, SortOrder, SortSpec, ViewStatus,
};

use crate::args::definition::ListingArgs;
use crate::args::render;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Resolve the sort for this run.
///
/// Inputs:
/// - `opts`: Listing options from the command line
/// - `settings`: Loaded settings (provides the default sort)
///
/// Output:
/// - `--sort`/`--desc` when given, else the configured default sort.
///
/// # Errors
/// - Returns an error for an unknown sort field name.
pub fn resolve_sort(opts: &ListingArgs, settings: &Settings) -> Result<SortSpec> {
    let mut sort = match opts.sort.as_deref() {
        Some(name) => SortSpec::by(
            SortField::from_config_key(name).ok_or_else(|| format!("unknown sort field: {name}"))?,
        ),
        None => settings.default_sort,
    };
    if opts.desc {
        sort.order = SortOrder::Desc;
    }
    Ok(sort)
}

/// What: Run a listing query and render the settled screen.
///
/// Inputs:
/// - `kind`: Listing to browse
/// - `opts`: Filters, sort, search text, page count and output format
/// - `settings`: Loaded settings
///
/// Output:
/// - Rendered table or JSON.
///
/// # Errors
/// - Unknown sort field, a stopped service, or a failed fetch.
///
/// Details:
/// - Starts its own `ListingService` and always stops it before returning.
/// - Loads further pages with `load_more` until `opts.pages` pages are shown
///   or the catalog runs out.
pub async fn run_listing(
    kind: EntityKind,
    opts: &ListingArgs,
    settings: &Settings,
) -> Result<String> {
    let sort = resolve_sort(opts, settings)?;
    if let Some(field) = sort.field
        && !SortField::options_for(kind).contains(&field)
    {
        tracing::warn!(
            field = field.as_config_key(),
            entity = kind.label(),
            "sort field does not apply; order unchanged"
        );
    }
    let mut screen = ScreenState::new(kind, settings.page_size(kind));
    screen.filters = FilterSet::from_categories(opts.categories.iter().cloned());
    screen.sort = sort;
    screen.search_query = opts.search.clone().unwrap_or_default();

    let catalog = MockCatalog::new(CatalogOptions::from(settings));
    let mut service = ListingService::new(Arc::new(catalog), settings.cancel_superseded);
    let mut controller = ScreenController::new(screen, service.start());
    controller.open();
    let driven = load_pages(&mut controller, &mut service, opts.pages.max(1)).await;
    service.stop().await;
    driven?;

    let screen = controller.into_screen();
    if let ViewStatus::Error(e) = &screen.status {
        return Err(e.clone().into());
    }
    tracing::info!(
        entity = kind.label(),
        rows = screen.items.len(),
        pages = screen.page,
        has_more = screen.has_more,
        "listing complete"
    );
    if opts.json {
        render::items_json(&screen.items)
    } else {
        Ok(render::listing_table(&screen))
    }
}

async fn load_pages(
    controller: &mut ScreenController,
    service: &mut ListingService,
    pages: u32,
) -> Result<()> {
    settle(controller, service).await?;
    let mut loaded = 1;
    while loaded < pages && controller.load_more() {
        settle(controller, service).await?;
        loaded += 1;
    }
    Ok(())
}

/// Feed results into the screen until the latest query has answered.
async fn settle(controller: &mut ScreenController, service: &mut ListingService) -> Result<()> {
    while controller.status().is_loading() {
        let Some(results) = service.next_results().await else {
            return Err("listing service stopped".into());
        };
        controller.handle_results(results);
    }
    Ok(())
}
