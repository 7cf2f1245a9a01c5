//! Library entry for Gigboard exposing the listing pipeline for the binary and integration tests.

pub mod app;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_utils;
