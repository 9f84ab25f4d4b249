//! Content models.
//!
//! Every listable type implements [`ContentItem`] so the query layer can
//! filter and sort it without knowing the concrete type. Fields mirror the
//! keys used in the content files. Every key is optional: a missing text
//! field reads as empty so a half-written entry still lists.

use folio_core::ContentItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::icon::Icon;

/// Words per minute used for blog reading-time estimates.
pub const READING_WORDS_PER_MINUTE: usize = 200;

// ============================================================================
// Projects
// ============================================================================

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    /// Source repository URL.
    #[serde(default)]
    pub github: Option<String>,
    /// Live demo URL.
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Pinned to the top of the home page.
    #[serde(default)]
    pub featured: bool,
}

// ============================================================================
// Blog posts
// ============================================================================

/// Frontmatter keys accepted at the top of a blog post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFrontmatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "excerpt")]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Unpublished posts are skipped by the loader.
    #[serde(default)]
    pub draft: bool,
}

/// A blog article. `body` holds the raw markdown after the frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(skip)]
    pub body: String,
}

impl BlogPost {
    /// Build a post from parsed frontmatter. `fallback_slug` (normally the
    /// file stem) is used when the frontmatter carries no slug, and as the
    /// title when it carries no title.
    pub fn from_parts(front: PostFrontmatter, fallback_slug: &str, body: String) -> Self {
        Self {
            title: title_or(front.title, fallback_slug),
            slug: front.slug.unwrap_or_else(|| fallback_slug.to_string()),
            description: front.description,
            tags: front.tags,
            category: front.category,
            date: front.date,
            author: front.author,
            body,
        }
    }

    /// Estimated reading time, never less than one minute.
    pub fn reading_time_minutes(&self) -> usize {
        let words = self.body.split_whitespace().count();
        words.div_ceil(READING_WORDS_PER_MINUTE).max(1)
    }
}

// ============================================================================
// FiveM scripts
// ============================================================================

/// A FiveM script listed in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FivemScript {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text price as shown on the listing, e.g. `"$15"` or `"Free"`.
    #[serde(default)]
    pub price: Option<String>,
    /// Supported frameworks (ESX, QBCore, standalone).
    #[serde(default)]
    pub framework: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

// ============================================================================
// Referrals
// ============================================================================

/// A referral or affiliate offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub url: String,
    /// What the visitor gets, e.g. `"$10/mo credit"`.
    #[serde(default)]
    pub reward: Option<String>,
}

// ============================================================================
// Links
// ============================================================================

/// An entry on the link-in-bio hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Docs
// ============================================================================

/// Frontmatter keys accepted at the top of a docs page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocFrontmatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Position within the docs navigation; lower comes first.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A page in the documentation section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocPage {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub order: i64,
    pub section: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub body: String,
}

impl DocPage {
    /// Build a page from parsed frontmatter. Pages without an explicit
    /// `order` sort after every ordered page; pages without a title take
    /// the last segment of their slug.
    pub fn from_parts(front: DocFrontmatter, slug: &str, body: String) -> Self {
        let fallback = slug.rsplit('/').next().unwrap_or(slug);
        Self {
            title: title_or(front.title, fallback),
            slug: slug.to_string(),
            description: front.description,
            order: front.order.unwrap_or(i64::MAX),
            section: front.section,
            tags: front.tags,
            body,
        }
    }
}

fn title_or(title: String, fallback: &str) -> String {
    if title.trim().is_empty() {
        fallback.to_string()
    } else {
        title
    }
}

// ============================================================================
// ContentItem implementations
// ============================================================================

impl ContentItem for Project {
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
}

impl ContentItem for BlogPost {
    fn id(&self) -> &str {
        &self.slug
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
}

impl ContentItem for FivemScript {
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

impl ContentItem for Referral {
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
    fn price(&self) -> Option<&str> {
        self.reward.as_deref()
    }
}

impl ContentItem for LinkItem {
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
}

impl ContentItem for DocPage {
    fn id(&self) -> &str {
        &self.slug
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
        self.section.as_deref()
    }
}

// ============================================================================
// Collections
// ============================================================================

/// The listable collections a site exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Blog,
    Scripts,
    Referrals,
    Links,
    Docs,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Projects,
        Collection::Blog,
        Collection::Scripts,
        Collection::Referrals,
        Collection::Links,
        Collection::Docs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Blog => "blog",
            Collection::Scripts => "scripts",
            Collection::Referrals => "referrals",
            Collection::Links => "links",
            Collection::Docs => "docs",
        }
    }

    /// Message shown when a query over this collection matches nothing.
    pub fn empty_message(self) -> &'static str {
        match self {
            Collection::Projects => "No projects found",
            Collection::Blog => "No articles found",
            Collection::Scripts => "No scripts found",
            Collection::Referrals => "No referrals found",
            Collection::Links => "No links found",
            Collection::Docs => "No docs found",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "projects" | "project" => Ok(Collection::Projects),
            "blog" | "posts" | "articles" => Ok(Collection::Blog),
            "scripts" | "fivem" => Ok(Collection::Scripts),
            "referrals" => Ok(Collection::Referrals),
            "links" => Ok(Collection::Links),
            "docs" => Ok(Collection::Docs),
            other => Err(format!(
                "unknown collection '{other}' (expected one of: projects, blog, scripts, referrals, links, docs)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_body(body: &str) -> BlogPost {
        BlogPost::from_parts(
            PostFrontmatter {
                title: "Hello".into(),
                ..Default::default()
            },
            "hello",
            body.to_string(),
        )
    }

    #[test]
    fn test_reading_time_minimum_one_minute() {
        assert_eq!(post_with_body("").reading_time_minutes(), 1);
        assert_eq!(post_with_body("just a few words").reading_time_minutes(), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let body = "word ".repeat(READING_WORDS_PER_MINUTE + 1);
        assert_eq!(post_with_body(&body).reading_time_minutes(), 2);
    }

    #[test]
    fn test_post_slug_prefers_frontmatter() {
        let front = PostFrontmatter {
            title: "Hi".into(),
            slug: Some("custom".into()),
            ..Default::default()
        };
        let post = BlogPost::from_parts(front, "file-stem", String::new());
        assert_eq!(post.slug, "custom");

        let post = post_with_body("");
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_doc_without_order_sorts_last() {
        let page = DocPage::from_parts(
            DocFrontmatter {
                title: "Intro".into(),
                ..Default::default()
            },
            "intro",
            String::new(),
        );
        assert_eq!(page.order, i64::MAX);
    }

    #[test]
    fn test_script_exposes_price() {
        let script: FivemScript = toml::from_str(
            r#"
                id = "garage"
                title = "Advanced Garage"
                description = "Persistent vehicles"
                price = "$15"
            "#,
        )
        .unwrap();
        assert_eq!(ContentItem::price(&script), Some("$15"));
        assert!(ContentItem::date(&script).is_none());
    }

    #[test]
    fn test_link_defaults() {
        let link: LinkItem = toml::from_str(
            r#"
                id = "gh"
                title = "GitHub"
                url = "https://github.com/example"
            "#,
        )
        .unwrap();
        assert_eq!(link.icon, Icon::Link);
        assert!(link.description.is_empty());
        assert!(link.tags.is_empty());
    }

    #[test]
    fn test_missing_text_fields_read_as_empty() {
        let project: Project = toml::from_str("id = \"half\"\ntitle = \"Half done\"").unwrap();
        assert!(project.description.is_empty());

        let referral: Referral = toml::from_str("title = \"Host\"").unwrap();
        assert!(referral.url.is_empty());
        assert!(referral.id.is_empty());

        let link: LinkItem = toml::from_str("title = \"Blog\"").unwrap();
        assert!(link.url.is_empty());
    }

    #[test]
    fn test_untitled_entries_fall_back_to_slug() {
        let post = BlogPost::from_parts(PostFrontmatter::default(), "first-post", String::new());
        assert_eq!(post.title, "first-post");

        let page = DocPage::from_parts(DocFrontmatter::default(), "guides/setup", String::new());
        assert_eq!(page.title, "setup");
        assert_eq!(page.slug, "guides/setup");
    }

    #[test]
    fn test_collection_parse() {
        assert_eq!("Blog".parse::<Collection>().unwrap(), Collection::Blog);
        assert_eq!("fivem".parse::<Collection>().unwrap(), Collection::Scripts);
        assert!("recipes".parse::<Collection>().is_err());
    }

    #[test]
    fn test_collection_empty_messages() {
        assert_eq!(Collection::Blog.empty_message(), "No articles found");
        assert_eq!(Collection::Scripts.empty_message(), "No scripts found");
        for collection in Collection::ALL {
            assert_eq!(
                collection.name().parse::<Collection>().unwrap(),
                collection
            );
        }
    }
}
