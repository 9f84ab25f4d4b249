//! Markdown rendering pipeline.
//!
//! Rendering runs four stages over a document:
//!
//! 1. **Parse** with `pulldown-cmark`. Headings get ids slugified from
//!    their text; fenced code blocks are wrapped with a language label, a
//!    line count and a percent-encoded copy of the raw code.
//! 2. **Highlight** each code block (see [`highlight`](mod@highlight)).
//! 3. **Sanitize** the HTML with `ammonia`.
//! 4. **Enhance** code blocks with copy buttons and line numbers
//!    (see [`enhance`](mod@enhance)). This stage is idempotent.
//!
//! [`render`] never fails: empty input yields [`EMPTY_PLACEHOLDER`] and
//! any error is rendered as an inline `markdown-error` message. Use
//! [`try_render`] to observe errors instead.
//!
//! # Example
//!
//! ```
//! use folio_content::markdown;
//!
//! let html = markdown::render("# Title");
//! assert!(html.contains(r#"<h1 id="title">Title</h1>"#));
//! ```

pub mod enhance;
pub mod highlight;
pub mod sanitize;
pub mod slug;

use folio_core::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

pub use enhance::{enhance, EnhanceOptions};
pub use highlight::{highlight, Detection, Highlighted};
pub use sanitize::sanitize;
pub use slug::{slugify, SlugRegistry};

/// Rendered in place of an empty document.
pub const EMPTY_PLACEHOLDER: &str = r#"<p class="markdown-empty">No content available.</p>"#;

/// Options for the whole pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub enhance: EnhanceOptions,
}

/// A heading found while rendering, for building a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Output of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    pub headings: Vec<Heading>,
}

impl RenderedDocument {
    fn placeholder() -> Self {
        Self {
            html: EMPTY_PLACEHOLDER.to_string(),
            headings: Vec::new(),
        }
    }
}

/// Render markdown to sanitized, enhanced HTML with default options.
pub fn render(markdown: &str) -> String {
    render_with(markdown, RenderOptions::default()).html
}

/// Highlighting stage used by the pipeline.
type HighlightFn = fn(&str, Option<&str>) -> Result<Highlighted>;

/// Render markdown, returning the headings alongside the HTML.
///
/// Errors are caught and rendered inline.
pub fn render_with(markdown: &str, options: RenderOptions) -> RenderedDocument {
    render_inline(markdown, options, highlight)
}

/// Render markdown, propagating parse or highlight errors.
pub fn try_render(markdown: &str, options: RenderOptions) -> Result<RenderedDocument> {
    run_pipeline(markdown, options, highlight)
}

fn render_inline(
    markdown: &str,
    options: RenderOptions,
    highlighter: HighlightFn,
) -> RenderedDocument {
    match run_pipeline(markdown, options, highlighter) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("markdown rendering failed: {e}");
            RenderedDocument {
                html: error_html(&e.to_string()),
                headings: Vec::new(),
            }
        }
    }
}

fn run_pipeline(
    markdown: &str,
    options: RenderOptions,
    highlighter: HighlightFn,
) -> Result<RenderedDocument> {
    if markdown.trim().is_empty() {
        return Ok(RenderedDocument::placeholder());
    }

    let (raw, headings) = to_html(markdown, highlighter)?;
    let clean = sanitize(&raw);
    let html = enhance(&clean, options.enhance);
    Ok(RenderedDocument { html, headings })
}

/// Inline message shown in place of content that failed to render.
pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="markdown-error" role="alert">Error rendering content: {}</div>"#,
        escape_html(message)
    )
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Stages 1 and 2: parse, assign heading ids, and highlight code blocks.
fn to_html(markdown: &str, highlighter: HighlightFn) -> Result<(String, Vec<Heading>)> {
    let mut parser = Parser::new_ext(markdown, parser_options());
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut headings = Vec::new();
    let mut slugs = SlugRegistry::new();

    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let inner: Vec<Event<'_>> = parser
                    .by_ref()
                    .take_while(|e| !matches!(e, Event::End(TagEnd::Heading(_))))
                    .collect();
                let text = plain_text(&inner);
                let id = match id {
                    Some(custom) => slugs.claim(custom.to_string()),
                    None => slugs.unique(&text),
                };

                let mut inner_html = String::new();
                html::push_html(&mut inner_html, inner.into_iter());

                let level = level as u8;
                events.push(Event::Html(CowStr::from(format!(
                    "<h{level} id=\"{}\">{inner_html}</h{level}>\n",
                    escape_html(&id)
                ))));
                headings.push(Heading { level, text, id });
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                };
                let mut code = String::new();
                for inner in parser.by_ref() {
                    match inner {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => code.push_str(&text),
                        _ => {}
                    }
                }
                events.push(Event::Html(CowStr::from(code_block_html(
                    &code,
                    lang.as_deref(),
                    highlighter,
                )?)));
            }
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    Ok((out, headings))
}

/// First word of a fence info string (`rust,ignore` → `rust`).
fn fence_language(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        if let Event::Text(t) | Event::Code(t) = event {
            text.push_str(t);
        }
    }
    text
}

fn code_block_html(code: &str, lang: Option<&str>, highlighter: HighlightFn) -> Result<String> {
    let highlighted = highlighter(code, lang)?;
    let label = match (lang, highlighted.detection) {
        (Some(lang), _) => lang.to_ascii_lowercase(),
        (None, Detection::Detected) => highlighted.syntax_name.to_ascii_lowercase(),
        (None, _) => "text".to_string(),
    };
    let label = escape_html(&label);
    let lines = code.lines().count().max(1);

    Ok(format!(
        concat!(
            r#"<div class="code-block" data-language="{label}" data-lines="{lines}" data-code="{payload}">"#,
            r#"<div class="code-header"><span class="code-language">{label}</span></div>"#,
            r#"<pre><code class="language-{label}">{body}</code></pre></div>"#,
            "\n"
        ),
        label = label,
        lines = lines,
        payload = urlencoding::encode(code),
        body = highlighted.html,
    ))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
