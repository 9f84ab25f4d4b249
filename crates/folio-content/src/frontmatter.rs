//! YAML frontmatter extraction.
//!
//! Markdown content files open with a `---` fenced YAML block:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust]
//! ---
//! # Body starts here
//! ```

use folio_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Split `content` into `(yaml, body)`.
///
/// Returns `None` when the content does not start with a frontmatter fence
/// or the closing fence is missing. A leading byte-order mark is ignored
/// and CRLF line endings are accepted.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse the frontmatter of a markdown file into `T`, returning it with
/// the remaining body.
///
/// `path` is only used for error messages.
pub fn parse_frontmatter<T: DeserializeOwned>(content: &str, path: &Path) -> Result<(T, String)> {
    let (yaml, body) = split_frontmatter(content)
        .ok_or_else(|| Error::parse(path, "missing or unterminated frontmatter block"))?;
    let front: T = yaml_serde::from_str(yaml).map_err(|e| Error::parse(path, e.to_string()))?;
    Ok((front, body.trim_start_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Front {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_split_frontmatter() {
        let (yaml, body) = split_frontmatter("---\ntitle: Hi\n---\n# Body\n").unwrap();
        assert_eq!(yaml, "title: Hi\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let (yaml, body) = split_frontmatter("---\r\ntitle: Hi\r\n---\r\nBody").unwrap();
        assert_eq!(yaml, "title: Hi\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_frontmatter_missing() {
        assert!(split_frontmatter("# Just markdown").is_none());
        assert!(split_frontmatter("---\ntitle: never closed\n").is_none());
    }

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: Building a Portfolio\ntags: [rust, web]\n---\n\nIntro text";
        let (front, body): (Front, String) =
            parse_frontmatter(content, Path::new("blog/portfolio.md")).unwrap();
        assert_eq!(front.title, "Building a Portfolio");
        assert_eq!(front.tags, vec!["rust", "web"]);
        assert_eq!(body, "Intro text");
    }

    #[test]
    fn test_parse_frontmatter_error_names_file() {
        let err = parse_frontmatter::<Front>("no fence", Path::new("blog/broken.md")).unwrap_err();
        assert!(err.to_string().contains("blog/broken.md"));

        let err =
            parse_frontmatter::<Front>("---\ntags: [a]\n---\n", Path::new("blog/untitled.md"))
                .unwrap_err();
        assert!(err.to_string().contains("blog/untitled.md"));
    }
}
