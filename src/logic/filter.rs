use fuzzy_matcher::skim::SkimMatcherV2;

use crate::state::{ListingFilters, ListingItem};

/// What: Check a row's category against the selected categories.
///
/// Inputs:
/// - `category`: The row's category field
/// - `selected`: Selected categories from the request descriptor
///
/// Output:
/// - `true` when any selected category equals the row's category, ignoring ASCII case.
#[must_use]
pub fn category_matches(category: &str, selected: &[String]) -> bool {
    let category = category.trim();
    selected
        .iter()
        .any(|c| c.trim().eq_ignore_ascii_case(category))
}

/// What: Check a row against free-text search.
///
/// Inputs:
/// - `item`: Row to test
/// - `query`: Trimmed search text
/// - `matcher`: Fuzzy matcher to use instead of substring matching, if any
///
/// Output:
/// - `true` when the name/title or category contains the query (case-insensitive),
///   or fuzzy-matches it when a matcher is supplied.
#[must_use]
pub fn text_matches(item: &ListingItem, query: &str, matcher: Option<&SkimMatcherV2>) -> bool {
    if query.is_empty() {
        return true;
    }
    let name = item.display_name();
    let category = item.category();
    if let Some(m) = matcher {
        return crate::util::fuzzy_match_rank_with_matcher(name, query, m).is_some()
            || crate::util::fuzzy_match_rank_with_matcher(category, query, m).is_some();
    }
    let ql = query.to_lowercase();
    name.to_lowercase().contains(&ql) || category.to_lowercase().contains(&ql)
}

/// What: Keep only rows matching a request's category filter and search text.
///
/// Inputs:
/// - `items`: Rows to filter in place, order preserved
/// - `filters`: Category filter; `None` matches everything
/// - `query`: Search text; `None` matches everything
/// - `fuzzy`: Use fuzzy matching for the search text
pub fn retain_matching(
    items: &mut Vec<ListingItem>,
    filters: Option<&ListingFilters>,
    query: Option<&str>,
    fuzzy: bool,
) {
    if let Some(f) = filters {
        items.retain(|it| category_matches(it.category(), &f.category));
    }
    if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
        let matcher = fuzzy.then(SkimMatcherV2::default);
        items.retain(|it| text_matches(it, q, matcher.as_ref()));
    }
}
