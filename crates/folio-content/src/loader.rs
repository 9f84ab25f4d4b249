//! Loading a content directory into a [`ContentStore`].
//!
//! Layout, relative to the content root:
//!
//! ```text
//! projects.toml    [[projects]] ...
//! scripts.toml     [[scripts]] ...
//! referrals.toml   [[referrals]] ...
//! links.toml       [[links]] ...
//! skills.toml      [[groups]] ... with nested [[groups.skills]]
//! playlist.toml    [[tracks]] ...
//! blog/*.md        YAML frontmatter + markdown body
//! docs/**/*.md     YAML frontmatter + markdown body
//! ```
//!
//! Every piece is optional: a missing file or directory loads as an empty
//! collection. Broken content never fails the load. A collection file
//! that does not parse loads as empty, an entry that does not fit its
//! model is skipped, and a markdown file without frontmatter loads with
//! default metadata. Each of these is logged at warn level with the file
//! name.

use folio_core::util::files::{self, Depth};
use folio_core::{ConfigProvider, Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::models::{
    BlogPost, DocFrontmatter, DocPage, FivemScript, LinkItem, PostFrontmatter, Project, Referral,
};
use crate::playlist::{Playlist, Track};
use crate::skills::SkillGroup;

/// All of a site's content, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    root: PathBuf,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub scripts: Vec<FivemScript>,
    pub referrals: Vec<Referral>,
    pub links: Vec<LinkItem>,
    pub skills: Vec<SkillGroup>,
    pub playlist: Playlist,
    pub docs: Vec<DocPage>,
}

impl ContentStore {
    /// Load everything under `root`.
    pub async fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !files::exists(&root).await {
            return Err(Error::not_found(format!(
                "content directory {} does not exist",
                root.display()
            )));
        }

        let projects: Vec<Project> =
            load_collection(&root.join("projects.toml"), "projects").await;
        let scripts: Vec<FivemScript> =
            load_collection(&root.join("scripts.toml"), "scripts").await;
        let referrals: Vec<Referral> =
            load_collection(&root.join("referrals.toml"), "referrals").await;
        let links: Vec<LinkItem> = load_collection(&root.join("links.toml"), "links").await;
        let skills: Vec<SkillGroup> = load_collection(&root.join("skills.toml"), "groups").await;
        let tracks: Vec<Track> = load_collection(&root.join("playlist.toml"), "tracks").await;

        let posts = load_posts(&root.join("blog")).await;
        let docs = load_docs(&root.join("docs")).await;

        log::info!(
            "loaded content from {}: {} projects, {} posts, {} scripts, {} referrals, {} links, {} docs",
            root.display(),
            projects.len(),
            posts.len(),
            scripts.len(),
            referrals.len(),
            links.len(),
            docs.len()
        );

        Ok(Self {
            root,
            projects,
            posts,
            scripts,
            referrals,
            links,
            skills,
            playlist: Playlist::new(tracks),
            docs,
        })
    }

    /// Load from the content root a config provider points at.
    pub async fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::load(config.content_path("")?).await
    }

    /// Directory this store was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a blog post by slug.
    pub fn post(&self, slug: &str) -> Result<&BlogPost> {
        self.posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| Error::not_found(format!("blog post '{slug}'")))
    }

    /// Look up a docs page by slug.
    pub fn doc(&self, slug: &str) -> Result<&DocPage> {
        self.docs
            .iter()
            .find(|d| d.slug == slug)
            .ok_or_else(|| Error::not_found(format!("docs page '{slug}'")))
    }

    /// Featured projects, in file order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

/// Read the `key` array of a TOML collection file.
///
/// Entries are deserialized one at a time so a bad entry costs only
/// itself. An absent file is an empty collection.
async fn load_collection<T: DeserializeOwned>(path: &Path, key: &str) -> Vec<T> {
    let content = match files::read_optional(path).await {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::debug!("no collection file at {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            log::warn!("skipping collection: {e}");
            return Vec::new();
        }
    };
    let mut table = match toml::from_str::<toml::Table>(&content) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("skipping collection: {}", Error::parse(path, e.to_string()));
            return Vec::new();
        }
    };

    let entries = match table.remove(key) {
        Some(toml::Value::Array(entries)) => entries,
        Some(_) => {
            log::warn!("{}: `{key}` is not an array of entries", path.display());
            return Vec::new();
        }
        None => return Vec::new(),
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match entry.try_into::<T>() {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("{}: skipping {key} entry {}: {e}", path.display(), i + 1);
                None
            }
        })
        .collect()
}

/// Read a markdown file's frontmatter and body.
///
/// A file without a frontmatter block loads with default metadata and the
/// whole file as its body. `None` for unreadable files and frontmatter
/// that is not valid YAML.
async fn read_entry<T: DeserializeOwned + Default>(path: &Path) -> Option<(T, String)> {
    let content = match files::read_file(path).await {
        Ok(content) => content,
        Err(e) => {
            log::warn!("skipping {e}");
            return None;
        }
    };
    if split_frontmatter(&content).is_none() {
        log::warn!("{} has no frontmatter, using defaults", path.display());
        return Some((T::default(), content));
    }
    match parse_frontmatter(&content, path) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("skipping {e}");
            None
        }
    }
}

/// List the markdown files of an optional content directory.
async fn list_markdown(dir: &Path, depth: Depth) -> Vec<files::ContentFile> {
    if !files::exists(dir).await {
        log::debug!("no content directory at {}", dir.display());
        return Vec::new();
    }
    files::markdown_files(dir, depth).await.unwrap_or_else(|e| {
        log::warn!("skipping {}: {e}", dir.display());
        Vec::new()
    })
}

/// Load published posts from `dir`, in file-name order.
async fn load_posts(dir: &Path) -> Vec<BlogPost> {
    let mut posts = Vec::new();
    for file in list_markdown(dir, Depth::TopLevel).await {
        let Some((front, body)) = read_entry::<PostFrontmatter>(&file.path).await else {
            continue;
        };
        if front.draft {
            log::debug!("skipping draft post {}", file.path.display());
            continue;
        }
        posts.push(BlogPost::from_parts(front, &file.stem, body));
    }
    posts
}

/// Load docs pages from `dir`, ordered by `(order, title)`.
///
/// Nested pages get slugs from their relative path (`guides/setup`).
async fn load_docs(dir: &Path) -> Vec<DocPage> {
    let mut docs = Vec::new();
    for file in list_markdown(dir, Depth::Recursive).await {
        let Some((front, body)) = read_entry::<DocFrontmatter>(&file.path).await else {
            continue;
        };
        let slug = doc_slug(&file.relative_path);
        docs.push(DocPage::from_parts(front, &slug, body));
    }
    docs.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    docs
}

fn doc_slug(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
