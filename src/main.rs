//! Gigboard binary entrypoint kept minimal. The pipeline lives in the library.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct GigboardTimer;

impl tracing_subscriber::fmt::time::FormatTime for GigboardTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S%.3f")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter directive when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `~/.config/gigboard/logs/gigboard.log` through a non-blocking
///   appender; falls back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = gigboard::config::logs_dir();
    log_path.push("gigboard.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(GigboardTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so output still goes somewhere
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(GigboardTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));
    tracing::info!(command = ?cli.command, "gigboard starting");
    let code = match args::process_args(&cli).await {
        Ok(output) => {
            print!("{output}");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("gigboard: {err}");
            std::process::ExitCode::FAILURE
        }
    };
    tracing::info!("gigboard exited");
    code
}
