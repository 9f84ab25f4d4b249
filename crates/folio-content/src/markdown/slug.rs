//! Heading slugs.

use std::collections::HashMap;

/// Slugify heading text: lowercase, runs of non-alphanumerics collapsed
/// into one `-`, no leading or trailing dash.
///
/// ```
/// use folio_content::markdown::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Hands out unique slugs within one document.
///
/// The first heading keeps its slug; repeats get `-1`, `-2`, ... Headings
/// with no alphanumeric text use `"section"` as their base.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a unique id derived from `text`.
    pub fn unique(&mut self, text: &str) -> String {
        let base = slugify(text);
        let base = if base.is_empty() {
            "section".to_string()
        } else {
            base
        };
        self.claim(base)
    }

    /// Reserve an explicit id (e.g. from `{#custom-id}` attributes).
    pub fn claim(&mut self, base: String) -> String {
        let mut count = self.seen.get(&base).copied().unwrap_or(0);
        let mut candidate = if count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        while count > 0 && self.seen.contains_key(&candidate) {
            count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(base, count + 1);
        self.seen.entry(candidate.clone()).or_insert(1);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Title"), "title");
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  What's new in v2.0?  "), "what-s-new-in-v2-0");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Café Über"), "café-über");
    }

    #[test]
    fn test_slugify_only_symbols() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_registry_deduplicates() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.unique("Setup"), "setup");
        assert_eq!(slugs.unique("Setup"), "setup-1");
        assert_eq!(slugs.unique("Setup"), "setup-2");
        assert_eq!(slugs.unique("Usage"), "usage");
    }

    #[test]
    fn test_registry_avoids_existing_suffix() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.unique("Setup 1"), "setup-1");
        assert_eq!(slugs.unique("Setup"), "setup");
        assert_eq!(slugs.unique("Setup"), "setup-2");
    }

    #[test]
    fn test_registry_empty_heading() {
        let mut slugs = SlugRegistry::new();
        assert_eq!(slugs.unique("???"), "section");
        assert_eq!(slugs.unique(""), "section-1");
    }
}
