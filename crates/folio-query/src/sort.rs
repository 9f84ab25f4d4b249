//! Stable sorting by date, title, or price.

use folio_core::ContentItem;

use crate::keys::{compare_titles, date_key, price_key};
use crate::state::SortBy;

/// Sort `items` in place. Equal keys keep their relative order.
pub fn sort_items<T: ContentItem>(items: &mut [T], sort_by: SortBy) {
    match sort_by {
        SortBy::DateDesc => {
            items.sort_by_cached_key(|item| std::cmp::Reverse(date_key(item.date())))
        }
        SortBy::DateAsc => items.sort_by_cached_key(|item| date_key(item.date())),
        SortBy::Alphabetical => items.sort_by(|a, b| compare_titles(a.title(), b.title())),
        SortBy::PriceAsc => {
            items.sort_by(|a, b| price_key(a.price()).total_cmp(&price_key(b.price())))
        }
        SortBy::PriceDesc => {
            items.sort_by(|a, b| price_key(b.price()).total_cmp(&price_key(a.price())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Item;

    fn ids<T: ContentItem>(items: &[T]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_alphabetical() {
        let mut items = vec![Item::new("z", "Zebra"), Item::new("a", "Alpha")];
        sort_items(&mut items, SortBy::Alphabetical);
        assert_eq!(ids(&items), vec!["a", "z"]);
    }

    #[test]
    fn test_alphabetical_is_caseless() {
        let mut items = vec![
            Item::new("b", "beta"),
            Item::new("c", "Charlie"),
            Item::new("a", "alpha"),
        ];
        sort_items(&mut items, SortBy::Alphabetical);
        assert_eq!(ids(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_alphabetical_ignores_accents() {
        let mut items = vec![
            Item::new("zebra", "Zebra"),
            Item::new("emile", "Émile"),
            Item::new("eve", "Eve"),
        ];
        sort_items(&mut items, SortBy::Alphabetical);
        assert_eq!(ids(&items), vec!["emile", "eve", "zebra"]);
    }

    #[test]
    fn test_date_orders() {
        let mut items = vec![
            Item::new("mid", "Mid").date("2023-06-01"),
            Item::new("new", "New").date("2024-01-01"),
            Item::new("old", "Old").date("January 5, 2020"),
            Item::new("none", "None"),
        ];
        sort_items(&mut items, SortBy::DateDesc);
        assert_eq!(ids(&items), vec!["new", "mid", "old", "none"]);

        sort_items(&mut items, SortBy::DateAsc);
        assert_eq!(ids(&items), vec!["none", "old", "mid", "new"]);
    }

    #[test]
    fn test_price_orders() {
        let mut items = vec![
            Item::new("ten", "Ten").price("$10/mo"),
            Item::new("five", "Five").price("$5/mo"),
            Item::new("free", "Free").price("Free"),
        ];
        sort_items(&mut items, SortBy::PriceAsc);
        assert_eq!(ids(&items), vec!["free", "five", "ten"]);

        sort_items(&mut items, SortBy::PriceDesc);
        assert_eq!(ids(&items), vec!["ten", "five", "free"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            Item::new("first", "First").date("bogus"),
            Item::new("second", "Second"),
            Item::new("third", "Third").date("not a date"),
        ];
        sort_items(&mut items, SortBy::DateDesc);
        assert_eq!(ids(&items), vec!["first", "second", "third"]);
    }
}
