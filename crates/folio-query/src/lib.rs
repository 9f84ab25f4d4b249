//! Filtering, search, sorting, and pagination over content collections.
//!
//! Every listing page (projects, blog, scripts, referrals, links) runs the
//! same pipeline over its items:
//!
//! 1. keep items that pass the tag/category filter ([`filter::matches_filter`])
//! 2. keep items that match the search text ([`filter::matches_search`])
//! 3. stable-sort by the selected [`SortBy`] ([`sort::sort_items`])
//! 4. optionally cut one [`Page`] out of the result ([`page::paginate`])
//!
//! Works over anything implementing [`ContentItem`], including references,
//! so results can be fed back through the pipeline.
//!
//! # Example
//!
//! ```
//! use folio_core::ContentItem;
//! use folio_query::{filter_sort_search, FilterState, SortBy};
//!
//! struct Card { id: String, title: String, tags: Vec<String> }
//!
//! impl ContentItem for Card {
//!     fn id(&self) -> &str { &self.id }
//!     fn title(&self) -> &str { &self.title }
//!     fn description(&self) -> &str { "" }
//!     fn tags(&self) -> &[String] { &self.tags }
//! }
//!
//! let cards = vec![
//!     Card { id: "z".into(), title: "Zebra".into(), tags: vec![] },
//!     Card { id: "a".into(), title: "Alpha".into(), tags: vec![] },
//! ];
//! let state = FilterState::new().with_sort(SortBy::Alphabetical);
//! let visible = filter_sort_search(&cards, &state);
//! let titles: Vec<&str> = visible.iter().map(|c| c.title()).collect();
//! assert_eq!(titles, vec!["Alpha", "Zebra"]);
//! ```

#![doc = include_str!("../README.md")]

pub mod debounce;
pub mod filter;
pub mod keys;
pub mod page;
pub mod sort;
pub mod state;

use folio_core::ContentItem;

pub use debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use filter::{available_filters, matches_filter, matches_search};
pub use page::{paginate, Page};
pub use sort::sort_items;
pub use state::{FilterState, Layout, SortBy};

/// Default page size for listings.
pub const DEFAULT_PER_PAGE: usize = 12;

/// Filter, search, and sort `items` according to `state`.
///
/// Returns references into `items`; the layout in `state` has no effect.
pub fn filter_sort_search<'a, T: ContentItem>(
    items: &'a [T],
    state: &FilterState,
) -> Vec<&'a T> {
    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| matches_filter(*item, &state.active_filter))
        .filter(|item| matches_search(*item, &state.search_query))
        .collect();
    sort_items(&mut visible, state.sort_by);

    log::debug!(
        "query filter='{}' search='{}' sort={}: {} of {} items",
        state.active_filter,
        state.search_query,
        state.sort_by,
        visible.len(),
        items.len()
    );
    visible
}

/// [`filter_sort_search`] followed by [`paginate`].
pub fn query<'a, T: ContentItem>(
    items: &'a [T],
    state: &FilterState,
    page: usize,
    per_page: usize,
) -> Page<&'a T> {
    paginate(filter_sort_search(items, state), page, per_page)
}

#[cfg(test)]
pub(crate) mod test_support {
    use folio_core::ContentItem;

    /// Minimal content item for query tests.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Item {
        pub id: String,
        pub title: String,
        pub description: String,
        pub tags: Vec<String>,
        pub category: Option<String>,
        pub date: Option<String>,
        pub price: Option<String>,
    }

    impl Item {
        pub fn new(id: &str, title: &str) -> Self {
            Self {
                id: id.to_string(),
                title: title.to_string(),
                description: String::new(),
                tags: Vec::new(),
                category: None,
                date: None,
                price: None,
            }
        }

        pub fn description(mut self, description: &str) -> Self {
            self.description = description.to_string();
            self
        }

        pub fn tags(mut self, tags: &[&str]) -> Self {
            self.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn category(mut self, category: &str) -> Self {
            self.category = Some(category.to_string());
            self
        }

        pub fn date(mut self, date: &str) -> Self {
            self.date = Some(date.to_string());
            self
        }

        pub fn price(mut self, price: &str) -> Self {
            self.price = Some(price.to_string());
            self
        }
    }

    impl ContentItem for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }

        fn date(&self) -> Option<&str> {
            self.date.as_deref()
        }

        fn price(&self) -> Option<&str> {
            self.price.as_deref()
        }
    }
}
