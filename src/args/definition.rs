//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::args::{listing, search, utils};
use gigboard::state::EntityKind;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Gigboard - browse artists and events of the gig marketplace catalog
#[derive(Parser, Debug)]
#[command(name = "gigboard")]
#[command(version)]
#[command(about = "Browse artists and events of the gig marketplace catalog", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this file instead of ~/.config/gigboard/settings.conf
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the simulated catalog latency in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List artists
    Artists(ListingArgs),
    /// List events
    Events(ListingArgs),
    /// Search artists, events and categories at once
    Search {
        /// Text to search for
        text: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by the listing commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListingArgs {
    /// Filter by category (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Sort field (rating, popularity, budget, date)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Free-text query matched against names, titles and categories
    #[arg(long)]
    pub search: Option<String>,

    /// Load this many pages
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// What: Run the command selected on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Rendered output on success; the first error otherwise.
///
/// # Errors
/// - Unreadable `--config` file, unknown sort field, or a failed listing fetch.
pub async fn process_args(args: &Args) -> Result<String> {
    let settings = utils::load_settings(args)?;
    match &args.command {
        Command::Artists(opts) => {
            listing::run_listing(EntityKind::Artists, opts, &settings).await
        }
        Command::Events(opts) => {
            listing::run_listing(EntityKind::Events, opts, &settings).await
        }
        Command::Search { text, json } => search::run_search(text, *json, &settings).await,
    }
}
