use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the config base.
const APP_DIR: &str = "gigboard";

/// Determine the settings file path, searching HOME first and then XDG.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join(APP_DIR)
                .join("settings.conf"),
        );
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join(APP_DIR).join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory: `$HOME/.config/gigboard`, else `$XDG_CONFIG_HOME/gigboard` (ensured to exist).
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config, logs and settings paths live under `$HOME/.config/gigboard`
    ///
    /// Details:
    /// - Mutates `HOME`, so it holds the module test mutex and restores the variable.
    fn paths_config_and_logs_under_home() {
        let _guard = crate::config::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with(".config/gigboard"));
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert_eq!(super::resolve_settings_config_path(), None);
        std::fs::write(cfg.join("settings.conf"), "latency_ms = 1\n").expect("write");
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(cfg.join("settings.conf"))
        );
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
