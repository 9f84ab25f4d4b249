//! List-view state: what the visitor has selected.

use folio_core::ALL_FILTER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// By title, caseless.
    Alphabetical,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::DateDesc,
        SortBy::DateAsc,
        SortBy::Alphabetical,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::DateDesc => "date-desc",
            SortBy::DateAsc => "date-asc",
            SortBy::Alphabetical => "alphabetical",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-desc" | "newest" => Ok(SortBy::DateDesc),
            "date-asc" | "oldest" => Ok(SortBy::DateAsc),
            "alphabetical" | "title" | "a-z" => Ok(SortBy::Alphabetical),
            "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            other => Err(format!(
                "unknown sort order '{other}' (expected date-desc, date-asc, alphabetical, price-asc or price-desc)"
            )),
        }
    }
}

/// Presentation of a listing. Does not affect which items are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        })
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            other => Err(format!("unknown layout '{other}' (expected grid or list)")),
        }
    }
}

/// The current search/filter/sort/layout selection of one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// `"All"` or a concrete tag/category.
    pub active_filter: String,
    pub search_query: String,
    pub sort_by: SortBy,
    pub layout: Layout,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_filter: ALL_FILTER.to_string(),
            search_query: String::new(),
            sort_by: SortBy::default(),
            layout: Layout::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.active_filter = filter.into();
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether the tag/category filter lets everything through.
    ///
    /// An empty filter counts as `"All"`.
    pub fn is_unfiltered(&self) -> bool {
        let filter = self.active_filter.trim();
        filter.is_empty() || filter == ALL_FILTER
    }

    /// Clear filter and search, keeping sort order and layout.
    pub fn reset(&mut self) {
        self.active_filter = ALL_FILTER.to_string();
        self.search_query.clear();
    }
}
