//! Sort keys extracted from free-form content metadata.
//!
//! Content is hand-authored, so dates and prices come in whatever shape the
//! author typed. Anything that cannot be read degrades to `0` instead of
//! failing the listing.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static PRICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?").expect("price pattern is valid")
});

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// Unix timestamp (seconds, UTC) for a content date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339, `YYYY-MM` and
/// `January 5, 2024` / `Jan 5, 2024`. Missing or unreadable dates give `0`.
pub fn date_key(date: Option<&str>) -> i64 {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return 0;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp();
    }
    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(raw, format) {
            return midnight_utc(day);
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return midnight_utc(day);
    }

    log::debug!("unreadable content date '{raw}', sorting as epoch");
    0
}

fn midnight_utc(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// The first number in a free-text price (`"$1,200/yr"` → `1200.0`).
///
/// Prices without a number (`"Free"`, `"Contact me"`) give `0`.
pub fn price_key(price: Option<&str>) -> f64 {
    price
        .and_then(|p| PRICE_TOKEN.find(p))
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Dictionary-style title comparison.
///
/// Letters compare without regard to accents or case first, so `Émile`
/// files under E. Ties fall back to accents (`resume` before `résumé`),
/// then to the raw titles so the order is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks removed, lowercased.
fn base_letters(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn accented(title: &str) -> String {
    title.nfd().collect::<String>().to_lowercase()
}
