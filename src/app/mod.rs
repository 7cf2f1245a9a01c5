//! Screen orchestration: the listing runtime and per-screen controllers.

mod controller;
pub mod runtime;

pub use controller::ScreenController;
pub use runtime::{ListingService, handle_listing_results, spawn_listing_worker};
