//! Syntax highlighting for fenced code blocks.
//!
//! Output is class-based (`<span class="source rust">`) so the site's
//! stylesheet owns the colours.

use folio_core::{Error, Result};
use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// How the syntax for a block was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The declared language was recognised.
    Declared,
    /// The declared language was missing or unknown; the syntax was
    /// detected from the code itself (shebang, modeline, XML prolog, ...).
    Detected,
    /// Nothing matched; the block is rendered as plain text.
    PlainText,
}

/// A highlighted code block.
#[derive(Debug, Clone)]
pub struct Highlighted {
    /// HTML for the inside of `<code>`.
    pub html: String,
    /// Name of the syntax used, e.g. `"Rust"`.
    pub syntax_name: String,
    pub detection: Detection,
}

/// Highlight `code`, preferring the declared `lang`.
///
/// Unsupported languages fall back to detection from the first line of
/// the code, then to plain text.
pub fn highlight(code: &str, lang: Option<&str>) -> Result<Highlighted> {
    let (syntax, detection) = resolve_syntax(code, lang);
    if detection != Detection::Declared
        && let Some(lang) = lang
    {
        log::debug!("unsupported code language '{lang}', using {}", syntax.name);
    }

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|e| Error::render(format!("highlighting {} code: {e}", syntax.name)))?;
    }

    Ok(Highlighted {
        html: generator.finalize(),
        syntax_name: syntax.name.clone(),
        detection,
    })
}

/// Whether `lang` names a syntax the highlighter knows.
pub fn is_supported(lang: &str) -> bool {
    find_declared(lang).is_some()
}

fn resolve_syntax<'a>(code: &str, lang: Option<&str>) -> (&'a SyntaxReference, Detection) {
    if let Some(syntax) = lang.and_then(find_declared) {
        return (syntax, Detection::Declared);
    }
    if let Some(syntax) = SYNTAX_SET.find_syntax_by_first_line(code) {
        return (syntax, Detection::Detected);
    }
    (SYNTAX_SET.find_syntax_plain_text(), Detection::PlainText)
}

fn find_declared(lang: &str) -> Option<&'static SyntaxReference> {
    let lang = lang.trim();
    if lang.is_empty() {
        return None;
    }
    let token = alias(lang);
    SYNTAX_SET
        .find_syntax_by_token(token)
        .or_else(|| SYNTAX_SET.find_syntax_by_name(lang))
}

/// Map fence labels the default syntax set does not know by token.
fn alias(lang: &str) -> &str {
    match lang.to_ascii_lowercase().as_str() {
        "ts" | "typescript" | "tsx" | "jsx" => "js",
        "shell" | "zsh" | "console" => "sh",
        "py" | "python3" => "python",
        _ => lang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_language() {
        let out = highlight("fn main() {}\n", Some("rust")).unwrap();
        assert_eq!(out.detection, Detection::Declared);
        assert_eq!(out.syntax_name, "Rust");
        assert!(out.html.contains("<span class="));
        assert!(out.html.contains("main"));
    }

    #[test]
    fn test_unknown_language_detects_from_shebang() {
        let out = highlight("#!/bin/bash\necho hi\n", Some("not-a-language")).unwrap();
        assert_eq!(out.detection, Detection::Detected);
    }

    #[test]
    fn test_unknown_language_without_hint_is_plain_text() {
        let out = highlight("just words\n", Some("not-a-language")).unwrap();
        assert_eq!(out.detection, Detection::PlainText);
        assert!(out.html.contains("just words"));
    }

    #[test]
    fn test_escapes_html_in_code() {
        let out = highlight("<script>alert(1)</script>\n", None).unwrap();
        assert!(!out.html.contains("<script>"));
        assert!(out.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_aliases() {
        assert!(is_supported("rust"));
        assert!(is_supported("ts"));
        assert!(is_supported("python3"));
        assert!(!is_supported(""));
    }
}
