//! Async helpers for reading a content directory.
//!
//! Collections are single TOML files read with [`read_optional`]; posts and
//! docs are directories of markdown scanned with [`markdown_files`].

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Extension of markdown content files.
pub const MARKDOWN_EXT: &str = "md";

/// How far below the scanned directory to look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    /// Only files directly inside the directory (blog posts).
    TopLevel,
    /// Every nested directory (docs sections).
    #[default]
    Recursive,
}

/// A markdown file found under a content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    pub path: PathBuf,
    /// File name without `.md`; the default slug.
    pub stem: String,
    /// Path below the scanned directory, e.g. `guides/setup.md`.
    pub relative_path: PathBuf,
}

/// List the markdown files under `dir`, sorted by relative path.
///
/// # Example
///
/// ```no_run
/// # use folio_core::util::files::{markdown_files, Depth};
/// # use std::path::Path;
/// # async fn example() -> folio_core::Result<()> {
/// let posts = markdown_files(Path::new("content/blog"), Depth::TopLevel).await?;
/// for post in &posts {
///     println!("{}", post.stem);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn markdown_files(dir: &Path, depth: Depth) -> Result<Vec<ContentFile>> {
    let paths = match depth {
        Depth::TopLevel => list_directory(dir).await?,
        Depth::Recursive => walk_directory(dir).await?,
    };

    let mut found: Vec<ContentFile> = paths
        .into_iter()
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXT))
        .filter_map(|path| content_file(dir, path))
        .collect();
    found.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(found)
}

/// Files directly inside `dir`.
async fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        if !path.is_dir() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Files anywhere below `dir`.
async fn walk_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut entries = WalkDir::new(dir);

    while let Some(entry) = entries.next().await {
        let entry = entry.map_err(|e| Error::io_with_path(e.into(), dir))?;
        let path = entry.path();
        if !path.is_dir() {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn content_file(dir: &Path, path: PathBuf) -> Option<ContentFile> {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
        log::warn!("skipping non-UTF-8 file name {}", path.display());
        return None;
    };
    let relative_path = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
    Some(ContentFile {
        path,
        stem,
        relative_path,
    })
}

/// Read a whole file, naming it in any error.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Read a file that may be absent.
///
/// Returns `Ok(None)` for a missing file and an error for anything else.
pub async fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_with_path(e, path)),
    }
}

/// Whether `path` exists. Permission errors count as absent.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
