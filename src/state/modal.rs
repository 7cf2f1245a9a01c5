//! Picker dialog state for the filter and sort modals.
//!
//! A picker works on a private copy of the committed selection. Nothing
//! reaches the screen until the user applies; cancelling drops the draft.

use crate::state::filter_set::FilterSet;
use crate::state::types::{EntityKind, SortField, SortSpec};

/// Draft selection inside the filter modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDraft {
    /// Local copy being edited.
    pub selected: FilterSet,
    /// Categories the modal lists as buttons.
    pub available: Vec<String>,
}

impl FilterDraft {
    /// Open the modal over the committed selection.
    #[must_use]
    pub fn open(committed: &FilterSet, kind: EntityKind) -> Self {
        Self {
            selected: committed.clone(),
            available: kind
                .default_filter_categories()
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        }
    }

    /// Toggle a category in the draft only.
    pub fn toggle(&mut self, category: &str) {
        self.selected.toggle(category);
    }

    /// Consume the draft and hand back the selection to commit.
    #[must_use]
    pub fn apply(self) -> FilterSet {
        self.selected
    }
}

/// Draft selection inside the sort modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortDraft {
    /// Local copy being edited.
    pub spec: SortSpec,
    /// Fields the modal lists as buttons.
    pub options: &'static [SortField],
}

impl SortDraft {
    /// Open the modal over the committed sort.
    #[must_use]
    pub const fn open(committed: SortSpec, kind: EntityKind) -> Self {
        Self {
            spec: committed,
            options: SortField::options_for(kind),
        }
    }

    /// Select a field in the draft (same field flips direction).
    pub fn select(&mut self, field: SortField) {
        self.spec.select_field(field);
    }

    /// Button label with direction arrow for the active field.
    #[must_use]
    pub fn option_label(&self, field: SortField) -> String {
        let arrow = self.spec.arrow(field);
        if arrow.is_empty() {
            field.label().to_string()
        } else {
            format!("{} {arrow}", field.label())
        }
    }

    /// Consume the draft and hand back the sort to commit.
    #[must_use]
    pub const fn apply(self) -> SortSpec {
        self.spec
    }
}

/// Which picker, if any, is open on a screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No picker open.
    #[default]
    None,
    /// Filter categories picker.
    Filter(FilterDraft),
    /// Sort options picker.
    Sort(SortDraft),
}
