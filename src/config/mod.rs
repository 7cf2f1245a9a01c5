//! User settings loaded from `settings.conf`.

use std::fs;
use std::path::Path;

use crate::state::{EntityKind, SortSpec};

mod parse;
mod paths;

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir};

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Rows per artists page.
    pub artists_page_size: usize,
    /// Rows per events page.
    pub events_page_size: usize,
    /// Simulated catalog latency in milliseconds.
    pub latency_ms: u64,
    /// Upper bound of random extra latency in milliseconds.
    pub latency_jitter_ms: u64,
    /// Abort a superseded in-flight fetch when a newer query arrives.
    pub cancel_superseded: bool,
    /// Fuzzy instead of substring search matching.
    pub search_fuzzy: bool,
    /// Sort selection new screens start with.
    pub default_sort: SortSpec,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artists_page_size: EntityKind::Artists.default_page_size(),
            events_page_size: EntityKind::Events.default_page_size(),
            latency_ms: 500,
            latency_jitter_ms: 0,
            cancel_superseded: true,
            search_fuzzy: false,
            default_sort: SortSpec::default(),
        }
    }
}

impl Settings {
    /// Page size for `kind`.
    #[must_use]
    pub const fn page_size(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Artists => self.artists_page_size,
            EntityKind::Events => self.events_page_size,
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file to read
///
/// Output:
/// - Parsed `Settings` (defaults for anything missing), or the read error.
///
/// # Errors
/// - Returns the I/O error when the file cannot be read.
pub fn load_from_path(path: &Path) -> std::io::Result<Settings> {
    let content = fs::read_to_string(path)?;
    let mut settings = Settings::default();
    parse_settings(&content, &mut settings);
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// What: Load user settings from the config directory under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is
///   missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    let Some(path) = paths::resolve_settings_config_path() else {
        tracing::debug!("no settings.conf found; using defaults");
        return Settings::default();
    };
    match load_from_path(&path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings; using defaults"
            );
            Settings::default()
        }
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortField;

    #[test]
    /// What: Loading from an explicit file applies its values over defaults
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "events_page_size = 2\ndefault_sort = date\n").expect("write");
        let s = load_from_path(&path).expect("load");
        assert_eq!(s.page_size(EntityKind::Events), 2);
        assert_eq!(s.page_size(EntityKind::Artists), 6);
        assert_eq!(s.default_sort, SortSpec::by(SortField::Date));
    }

    #[test]
    /// What: A missing file is an error for `load_from_path`
    fn load_from_path_missing_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_from_path(&dir.path().join("absent.conf")).is_err());
    }

    #[test]
    /// What: `settings()` falls back to defaults without a config file
    fn settings_defaults_without_file() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert_eq!(settings(), Settings::default());
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }
}
