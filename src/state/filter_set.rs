//! Ordered category filter selection.

use serde::{Deserialize, Serialize};

use crate::state::types::ListingFilters;

/// Active category filters for one listing screen.
///
/// Behaves like a set (no duplicates, exact string equality) but keeps
/// insertion order so badges render in a stable order. Membership is not
/// validated against the categories a picker offers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    /// Categories in insertion order.
    categories: Vec<String>,
}

impl FilterSet {
    /// Empty selection (no category filter).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// What: Build a selection from a sequence, dropping later duplicates.
    ///
    /// Inputs:
    /// - `categories`: Any iterable of category names.
    ///
    /// Output:
    /// - `FilterSet` holding each distinct name once, in first-seen order.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.set(categories);
        set
    }

    /// What: Toggle one category.
    ///
    /// Inputs:
    /// - `category`: Category name (compared exactly).
    ///
    /// Output:
    /// - Returns `true` when the category is now selected, `false` when it was removed.
    pub fn toggle(&mut self, category: &str) -> bool {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
            false
        } else {
            self.categories.push(category.to_string());
            true
        }
    }

    /// Replace the whole selection, keeping first occurrences only.
    pub fn set<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.clear();
        for c in categories {
            let c = c.into();
            if !self.categories.contains(&c) {
                self.categories.push(c);
            }
        }
    }

    /// Drop every category.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Whether `category` is selected.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether no category is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of selected categories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.categories.len()
    }

    /// Selected categories in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }

    /// Iterate selected categories in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.categories.iter()
    }

    /// Filter section for a request descriptor; `None` when nothing is selected.
    #[must_use]
    pub fn to_filters(&self) -> Option<ListingFilters> {
        if self.is_empty() {
            None
        } else {
            Some(ListingFilters {
                category: self.categories.clone(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
