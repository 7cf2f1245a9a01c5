//! Core non-UI listing logic split into modular submodules.

pub mod filter;
pub mod query;
pub mod sort;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use filter::{category_matches, retain_matching, text_matches};
pub use query::{compose_request, send_query};
pub use sort::present;
