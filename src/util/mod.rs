//! Small utility helpers for ranking, time formatting and column layout.

use unicode_width::UnicodeWidthStr;

/// What: Fuzzy-match `text` against `query` with a caller-provided matcher.
///
/// Inputs:
/// - `text`: Name, title or category to match against
/// - `query`: Query string to match
/// - `matcher`: Reference to a `SkimMatcherV2` instance to reuse across multiple calls
///
/// Output:
/// - `Some(score)` if the query matches (higher score = better match), `None` if no match
///
/// Details:
/// - Uses `fuzzy_matcher::skim::SkimMatcherV2` for fzf-style fuzzy matching
/// - Returns `None` for a blank query
#[must_use]
pub fn fuzzy_match_rank_with_matcher(
    text: &str,
    query: &str,
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
) -> Option<i64> {
    use fuzzy_matcher::FuzzyMatcher;

    if query.trim().is_empty() {
        return None;
    }

    matcher.fuzzy_match(text, query)
}

/// What: Convert an optional Unix timestamp (seconds) to a UTC date string.
///
/// Inputs:
/// - `ts`: Optional Unix timestamp in seconds since epoch.
///
/// Output:
/// - `YYYY-MM-DD` (UTC), an empty string for `None`, or the raw number when
///   the timestamp is out of chrono's range.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0)
        .map_or_else(|| t.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// What: Right-pad `s` with spaces to `width` terminal columns.
///
/// Inputs:
/// - `s`: Cell text
/// - `width`: Target display width
///
/// Output:
/// - Padded string; text already wider than `width` is returned unchanged.
///
/// Details:
/// - Measures display width with `unicode-width` so wide glyphs align.
#[must_use]
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// Display width of `s` in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// What: Format an optional number for table cells.
///
/// Output:
/// - `-` for `None`; integers without a fraction; one decimal otherwise.
#[must_use]
pub fn fmt_number(v: Option<f64>) -> String {
    match v {
        None => "-".to_string(),
        Some(x) if x.fract().abs() < f64::EPSILON => format!("{x:.0}"),
        Some(x) => format!("{x:.1}"),
    }
}
