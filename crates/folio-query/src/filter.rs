//! Tag/category filtering and free-text search.

use folio_core::{ContentItem, ALL_FILTER};

/// Whether `item` passes the tag/category filter.
///
/// `"All"` (or an empty filter) matches everything. Otherwise the item
/// matches when one of its tags, or its category, equals the filter.
pub fn matches_filter<T: ContentItem + ?Sized>(item: &T, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() || filter == ALL_FILTER {
        return true;
    }
    item.tags().iter().any(|tag| tag == filter) || item.category() == Some(filter)
}

/// Whether `item` matches a free-text search.
///
/// An empty (after trimming) query matches everything. Otherwise the query
/// must be a case-insensitive substring of the title, the description, or
/// any tag.
pub fn matches_search<T: ContentItem + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(item.title())
        || contains(item.description())
        || item.tags().iter().any(|tag| contains(tag))
}

/// `"All"` followed by every distinct category and tag, in first-seen order.
pub fn available_filters<T: ContentItem>(items: &[T]) -> Vec<String> {
    let mut filters = vec![ALL_FILTER.to_string()];
    let mut push = |value: &str| {
        let value = value.trim();
        if !value.is_empty() && !filters.iter().any(|f| f == value) {
            filters.push(value.to_string());
        }
    };

    for item in items {
        if let Some(category) = item.category() {
            push(category);
        }
        for tag in item.tags() {
            push(tag);
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Item;

    #[test]
    fn test_all_matches_everything() {
        let item = Item::new("a", "Alpha").tags(&["Rust"]);
        assert!(matches_filter(&item, "All"));
        assert!(matches_filter(&item, ""));
        assert!(matches_filter(&Item::new("b", "Bare"), "All"));
    }

    #[test]
    fn test_filter_by_tag_or_category() {
        let item = Item::new("a", "Alpha").tags(&["Rust", "CLI"]).category("Tools");
        assert!(matches_filter(&item, "Rust"));
        assert!(matches_filter(&item, "Tools"));
        assert!(!matches_filter(&item, "Lua"));
        assert!(!matches_filter(&item, "rust"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let item = Item::new("a", "Dashboard").tags(&["React"]);
        assert!(matches_search(&item, "react"));
        assert!(matches_search(&item, "DASH"));
        assert!(matches_search(&item, "  board "));
        assert!(!matches_search(&item, "vue"));
    }

    #[test]
    fn test_search_covers_description() {
        let item = Item::new("a", "Bot").description("Moderation for Discord servers");
        assert!(matches_search(&item, "discord"));
    }

    #[test]
    fn test_empty_search_matches() {
        let item = Item::new("a", "Alpha");
        assert!(matches_search(&item, ""));
        assert!(matches_search(&item, "   "));
    }

    #[test]
    fn test_available_filters_first_seen_order() {
        let items = vec![
            Item::new("a", "A").tags(&["Rust", "CLI"]).category("Tools"),
            Item::new("b", "B").tags(&["Lua", "Rust"]),
            Item::new("c", "C").category("Tools"),
        ];
        assert_eq!(
            available_filters(&items),
            vec!["All", "Tools", "Rust", "CLI", "Lua"]
        );
    }

    #[test]
    fn test_available_filters_empty() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(available_filters(&items), vec!["All"]);
    }
}
