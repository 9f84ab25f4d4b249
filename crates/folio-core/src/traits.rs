//! Core traits for Folio.
//!
//! - [`ConfigProvider`] abstracts where content lives and what the project
//!   is called, so loaders do not depend on a concrete config struct.
//! - [`ContentItem`] is the read-only view that every listable content type
//!   (projects, posts, scripts, referrals, links, docs) exposes to the
//!   query layer.

use std::path::PathBuf;

use crate::Result;

/// Trait for application configuration.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "my-portfolio"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join("content").join(content_type))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type.
    ///
    /// `content_type` is a key like `"blog"` or `"docs"`; an empty key
    /// yields the content root itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;
}

/// Read-only view of a listable piece of content.
///
/// Only `id`, `title`, `description` and `tags` are required. Types without
/// a category, date, or price keep the `None` defaults, which the query
/// layer treats as "no match" for category filters and as `0` for sort keys.
pub trait ContentItem {
    /// Stable identifier (slug).
    fn id(&self) -> &str;

    /// Display title.
    fn title(&self) -> &str;

    /// Short description or excerpt.
    fn description(&self) -> &str;

    /// Free-form tags.
    fn tags(&self) -> &[String];

    /// Optional category.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Optional date as authored (not yet parsed).
    fn date(&self) -> Option<&str> {
        None
    }

    /// Optional free-text price, e.g. `"$10/mo"`.
    fn price(&self) -> Option<&str> {
        None
    }
}

impl<T: ContentItem + ?Sized> ContentItem for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }

    fn date(&self) -> Option<&str> {
        (**self).date()
    }

    fn price(&self) -> Option<&str> {
        (**self).price()
    }
}
