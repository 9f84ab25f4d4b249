//! Post-render enhancement of code blocks.
//!
//! Adds a copy button to every code block and a line-number gutter to
//! multi-line blocks. Enhanced blocks are marked with
//! `data-enhanced="true"` and skipped on later passes, so running this
//! over its own output changes nothing.

use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div class="code-block"(?P<attrs>[^>]*)><div class="code-header">(?P<header>.*?)</div><pre(?P<pre_attrs>[^>]*)>(?P<gutter><span class="line-numbers".*?</span></span>)?<code(?P<code_attrs>[^>]*)>(?P<body>.*?)</code></pre></div>"#,
    )
    .expect("code block pattern is valid")
});

static LINE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-lines="(\d+)""#).expect("line count pattern is valid"));

const ENHANCED_MARKER: &str = r#"data-enhanced="true""#;

/// Which enhancements to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhanceOptions {
    pub copy_buttons: bool,
    pub line_numbers: bool,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            copy_buttons: true,
            line_numbers: true,
        }
    }
}

/// Enhance every code block in `html` that has not been enhanced yet.
pub fn enhance(html: &str, options: EnhanceOptions) -> String {
    CODE_BLOCK
        .replace_all(html, |caps: &Captures<'_>| enhance_block(caps, options))
        .into_owned()
}

fn enhance_block(caps: &Captures<'_>, options: EnhanceOptions) -> String {
    let attrs = &caps["attrs"];
    if attrs.contains(ENHANCED_MARKER) {
        return caps[0].to_string();
    }

    let header = &caps["header"];
    let pre_attrs = &caps["pre_attrs"];
    let code_attrs = &caps["code_attrs"];
    let body = &caps["body"];
    let lines = line_count(attrs, body);

    let mut out = String::with_capacity(caps[0].len() + 256);
    let _ = write!(
        out,
        r#"<div class="code-block"{attrs} {ENHANCED_MARKER}><div class="code-header">{header}"#
    );
    if options.copy_buttons {
        out.push_str(
            r#"<button type="button" class="copy-button" aria-label="Copy code">Copy</button>"#,
        );
    }
    out.push_str("</div>");

    if options.line_numbers && lines > 1 {
        out.push_str(
            r#"<pre class="has-line-numbers"><span class="line-numbers" aria-hidden="true">"#,
        );
        for n in 1..=lines {
            let _ = write!(out, "<span>{n}</span>");
        }
        out.push_str("</span>");
    } else {
        let _ = write!(out, "<pre{pre_attrs}>");
    }

    let _ = write!(out, "<code{code_attrs}>{body}</code></pre></div>");
    out
}

/// Lines recorded at parse time, falling back to counting the body.
fn line_count(attrs: &str, body: &str) -> usize {
    LINE_COUNT
        .captures(attrs)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or_else(|| body.trim_end_matches('\n').lines().count().max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: usize) -> String {
        let body: Vec<String> = (1..=lines).map(|n| format!("line {n}")).collect();
        format!(
            r#"<div class="code-block" data-language="text" data-lines="{lines}" data-code="x"><div class="code-header"><span class="code-language">text</span></div><pre><code class="language-text">{}
</code></pre></div>"#,
            body.join("\n")
        )
    }

    #[test]
    fn test_adds_copy_button() {
        let out = enhance(&block(1), EnhanceOptions::default());
        assert!(out.contains(r#"class="copy-button""#));
        assert!(out.contains(ENHANCED_MARKER));
        assert!(!out.contains("line-numbers"));
    }

    #[test]
    fn test_adds_line_numbers_to_multiline_blocks() {
        let out = enhance(&block(3), EnhanceOptions::default());
        assert!(out.contains(r#"<pre class="has-line-numbers">"#));
        assert!(out.contains("<span>1</span><span>2</span><span>3</span>"));
        assert!(!out.contains("<span>4</span>"));
    }

    #[test]
    fn test_idempotent() {
        let once = enhance(&block(3), EnhanceOptions::default());
        let twice = enhance(&once, EnhanceOptions::default());
        assert_eq!(once, twice);
        assert_eq!(twice.matches("copy-button").count(), 1);
    }

    #[test]
    fn test_options_disable_enhancements() {
        let options = EnhanceOptions {
            copy_buttons: false,
            line_numbers: false,
        };
        let out = enhance(&block(3), options);
        assert!(!out.contains("copy-button"));
        assert!(!out.contains("line-numbers"));
        assert!(out.contains(ENHANCED_MARKER));
    }

    #[test]
    fn test_leaves_other_markup_alone() {
        let html = "<p>No code here</p><pre><code>plain</code></pre>";
        assert_eq!(enhance(html, EnhanceOptions::default()), html);
    }

    #[test]
    fn test_multiple_blocks() {
        let html = format!("{}<p>between</p>{}", block(1), block(2));
        let out = enhance(&html, EnhanceOptions::default());
        assert_eq!(out.matches("copy-button").count(), 2);
        assert_eq!(out.matches("has-line-numbers").count(), 1);
        assert!(out.contains("<p>between</p>"));
    }

    #[test]
    fn test_line_count_fallback() {
        assert_eq!(line_count("", "a\nb\nc\n"), 3);
        assert_eq!(line_count(r#" data-lines="7""#, ""), 7);
        assert_eq!(line_count("", ""), 1);
    }
}
