use crate::config::Settings;
use crate::state::{SortField, SortOrder};

/// Strip a trailing `//` or `#` comment from a value and trim it.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}

/// Interpret common truthy spellings.
fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: File content, `key = value` per line
/// - `settings`: Mutable `Settings` to populate (starts from defaults)
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Blank lines and lines starting with `#` or `//` are skipped.
/// - Keys are lower-cased with `.`, `-` and spaces mapped to `_`.
/// - Unknown keys and unparsable values are logged and ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        let applied = match key.as_str() {
            "artists_page_size" => parse_page_size(val).map(|v| settings.artists_page_size = v),
            "events_page_size" => parse_page_size(val).map(|v| settings.events_page_size = v),
            "latency_ms" | "latency" => val.parse::<u64>().ok().map(|v| settings.latency_ms = v),
            "latency_jitter_ms" | "jitter_ms" => val
                .parse::<u64>()
                .ok()
                .map(|v| settings.latency_jitter_ms = v),
            "cancel_superseded" => parse_bool(val).map(|v| settings.cancel_superseded = v),
            "search_fuzzy" | "fuzzy_search" => parse_bool(val).map(|v| settings.search_fuzzy = v),
            "default_sort" | "sort_field" => {
                if val.is_empty() || val.eq_ignore_ascii_case("none") {
                    settings.default_sort.field = None;
                    Some(())
                } else {
                    SortField::from_config_key(val).map(|f| settings.default_sort.field = Some(f))
                }
            }
            "default_sort_order" | "sort_order" => {
                SortOrder::from_config_key(val).map(|o| settings.default_sort.order = o)
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown setting");
                Some(())
            }
        };
        if applied.is_none() {
            tracing::warn!(key = %key, value = %val, "invalid setting value ignored");
        }
    }
}

fn parse_page_size(val: &str) -> Option<usize> {
    val.parse::<usize>().ok().filter(|v| *v > 0)
}
