//! Path helpers for locating a site's content.

use std::path::{Path, PathBuf};

/// How many ancestors [`find_dir_with_marker`] checks, `start` included.
pub const MAX_WALK_LEVELS: usize = 10;

/// Find the nearest directory at or above `start` that contains `marker`.
///
/// Lets `folio` run from anywhere inside a site checkout and still find
/// the site root by its `content/` directory.
///
/// ```no_run
/// use folio_core::util::paths::find_dir_with_marker;
///
/// if let Some(site) = find_dir_with_marker(".", "content") {
///     println!("content lives in {}", site.join("content").display());
/// }
/// ```
pub fn find_dir_with_marker<P: AsRef<Path>>(start: P, marker: &str) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .take(MAX_WALK_LEVELS)
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

/// Replace a leading `~` with the home directory. Other paths, and every
/// path on a system without a home directory, come back unchanged.
///
/// ```
/// use folio_core::util::paths::expand_tilde;
///
/// assert!(!expand_tilde("~/sites/portfolio").starts_with("~"));
/// assert_eq!(expand_tilde("/srv/site"), std::path::PathBuf::from("/srv/site"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
