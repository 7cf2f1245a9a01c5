//! Core value types used by the listing pipeline.

use serde::{Deserialize, Serialize};

/// Which listing a screen browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Bookable performers.
    Artists,
    /// Hosted events open for applications.
    Events,
}

impl EntityKind {
    /// Page size the catalog uses when no setting overrides it.
    #[must_use]
    pub const fn default_page_size(self) -> usize {
        match self {
            Self::Artists => 6,
            Self::Events => 10,
        }
    }

    /// Quick-toggle chips shown above the list.
    #[must_use]
    pub const fn trending_categories(self) -> &'static [&'static str] {
        match self {
            Self::Artists => &["Music", "Exhibition", "Dance", "Comedy", "Theatre"],
            Self::Events => &["Concert", "Workshop", "Conference", "Exhibition"],
        }
    }

    /// Categories offered by the filter picker.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn default_filter_categories(self) -> &'static [&'static str] {
        &["Music", "Exhibition", "Dance", "Comedy", "Theatre"]
    }

    /// Human label used in logs and CLI headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Events => "events",
        }
    }
}

/// Sortable numeric fields. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Artist average rating.
    Rating,
    /// Event popularity score.
    Popularity,
    /// Booking budget.
    Budget,
    /// Event date (unix seconds).
    Date,
}

impl SortField {
    /// Sort choices offered on a screen, in display order.
    #[must_use]
    pub const fn options_for(kind: EntityKind) -> &'static [Self] {
        match kind {
            EntityKind::Artists => &[Self::Rating, Self::Popularity, Self::Budget],
            EntityKind::Events => &[Self::Date, Self::Popularity, Self::Budget],
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Popularity => "Popularity",
            Self::Budget => "Budget",
            Self::Date => "Date",
        }
    }

    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Popularity => "popularity",
            Self::Budget => "budget",
            Self::Date => "date",
        }
    }

    /// What: Parse a sort field from its config key or aliases.
    ///
    /// Inputs:
    /// - `s`: Config string (case-insensitive, surrounding whitespace ignored).
    ///
    /// Output:
    /// - `Some(SortField)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rating" | "average_rating" | "averagerating" => Some(Self::Rating),
            "popularity" => Some(Self::Popularity),
            "budget" => Some(Self::Budget),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Parse `asc`/`desc` (and the long forms).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Active sort selection for a listing screen.
///
/// `field == None` means the list keeps the order the catalog returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Active field, if any.
    pub field: Option<SortField>,
    /// Direction applied to `field`.
    pub order: SortOrder,
}

impl SortSpec {
    /// Sorted by `field` ascending.
    #[must_use]
    pub const fn by(field: SortField) -> Self {
        Self {
            field: Some(field),
            order: SortOrder::Asc,
        }
    }

    /// What: Select a sort field the way the sort picker does.
    ///
    /// Inputs:
    /// - `field`: Field the user tapped.
    ///
    /// Output:
    /// - Re-selecting the active field flips the order; any other field becomes
    ///   active in ascending order.
    pub fn select_field(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.order = self.order.flipped();
        } else {
            *self = Self::by(field);
        }
    }

    /// Whether a field is active.
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.field.is_some()
    }

    /// Direction arrow for `field`, empty when `field` is not the active one.
    #[must_use]
    pub fn arrow(&self, field: SortField) -> &'static str {
        match (self.field, self.order) {
            (Some(f), SortOrder::Asc) if f == field => "↑",
            (Some(f), SortOrder::Desc) if f == field => "↓",
            _ => "",
        }
    }
}

/// A bookable performer as returned by the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Stable identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Average review rating, when the artist has reviews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Main performing category.
    pub primary_category: String,
    /// Asking budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Avatar URL.
    #[serde(default)]
    pub profile_picture: String,
}

/// A hosted event as returned by the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier.
    pub id: u64,
    /// Event title.
    pub title: String,
    /// Event category.
    pub category: String,
    /// Scheduled date in unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// Popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    /// Offered budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

/// One row of a listing screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListingItem {
    /// Row on the artists screen.
    Artist(Artist),
    /// Row on the events screen.
    Event(Event),
}

impl ListingItem {
    /// Stable identifier of the underlying record.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Artist(a) => a.id,
            Self::Event(e) => e.id,
        }
    }

    /// Name for artists, title for events.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Artist(a) => &a.name,
            Self::Event(e) => &e.title,
        }
    }

    /// Category-like field: `primary_category` for artists, `category` for events.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Artist(a) => &a.primary_category,
            Self::Event(e) => &e.category,
        }
    }

    /// What: Numeric key used by the client-side sort.
    ///
    /// Inputs:
    /// - `field`: Active sort field.
    ///
    /// Output:
    /// - `Some(value)` when the record carries that field; `None` otherwise.
    ///
    /// Details:
    /// - Artists have no popularity or date; events have no rating.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sort_key(&self, field: SortField) -> Option<f64> {
        match (self, field) {
            (Self::Artist(a), SortField::Rating) => a.average_rating,
            (Self::Artist(a), SortField::Budget) => a.budget,
            (Self::Event(e), SortField::Date) => e.date.map(|d| d as f64),
            (Self::Event(e), SortField::Popularity) => e.popularity,
            (Self::Event(e), SortField::Budget) => e.budget,
            _ => None,
        }
    }
}

/// Category filter section of a request descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Categories to match; any match keeps the item.
    pub category: Vec<String>,
}

/// Request descriptor handed to the listing source.
///
/// Empty filter sets and blank search text are omitted rather than sent empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRequest {
    /// Listing being queried.
    pub entity: EntityKind,
    /// Category filter, absent when no category is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<ListingFilters>,
    /// Trimmed free-text query, absent when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// 1-indexed page number.
    pub page: u32,
}

/// Listing request sent to the background worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// What to fetch.
    pub request: ListingRequest,
}

/// Results corresponding to a prior [`ListingQuery`].
#[derive(Clone, Debug)]
pub struct ListingResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Echoed page number from the originating request.
    pub page: u32,
    /// Fetched rows in catalog order, or a displayable error.
    pub outcome: Result<Vec<ListingItem>, String>,
}

/// What the list area should show.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; the refresh indicator is on.
    Loading,
    /// The list holds at least one row.
    Ready,
    /// The last request succeeded with no rows.
    Empty,
    /// The last request failed; the previous list is still shown.
    Error(String),
}

impl ViewStatus {
    /// Whether the refresh indicator should spin.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Hit returned by the unified search box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    /// Matching artist.
    Artist(Artist),
    /// Matching event.
    Event(Event),
    /// Matching category name.
    Category {
        /// Category name.
        name: String,
    },
}

impl SearchHit {
    /// Text shown in the results list.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Artist(a) => &a.name,
            Self::Event(e) => &e.title,
            Self::Category { name } => name,
        }
    }
}
