//! Shared utilities for argument processing.

use crate::args::Args;
use gigboard::config::{self, Settings};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Resolve settings for this run.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Settings from `--config` when given, else from the config directory,
///   with `--latency-ms` applied on top.
///
/// # Errors
/// - Returns an error when an explicit `--config` file cannot be read.
pub fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_from_path(path)
            .map_err(|e| format!("cannot read config {}: {e}", path.display()))?,
        None => config::settings(),
    };
    if let Some(ms) = args.latency_ms {
        settings.latency_ms = ms;
    }
    Ok(settings)
}
