//! Handlers for the content commands: list, filters, search, render,
//! skills, playlist, and mailto.
//!
//! Each handler formats into a `String` first so output can be tested
//! without capturing stdout.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use folio_content::frontmatter::split_frontmatter;
use folio_content::markdown::{self, Heading};
use folio_content::playlist::format_duration;
use folio_content::skills::skills_in_group;
use folio_content::{Collection, ContactMessage, ContentStore, Playlist, RenderOptions, SkillGroup};
use folio_core::util::files;
use folio_core::{ContentItem, Result, ALL_FILTER};
use folio_query::{
    available_filters, filter_sort_search, query, Debouncer, FilterState, Layout, Page,
};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::{ListArgs, MailtoArgs, SearchArgs};

/// Dispatch a generic function over the item slice of a collection.
macro_rules! with_collection {
    ($store:expr, $collection:expr, |$items:ident| $body:expr) => {
        match $collection {
            Collection::Projects => {
                let $items = &$store.projects[..];
                $body
            }
            Collection::Blog => {
                let $items = &$store.posts[..];
                $body
            }
            Collection::Scripts => {
                let $items = &$store.scripts[..];
                $body
            }
            Collection::Referrals => {
                let $items = &$store.referrals[..];
                $body
            }
            Collection::Links => {
                let $items = &$store.links[..];
                $body
            }
            Collection::Docs => {
                let $items = &$store.docs[..];
                $body
            }
        }
    };
}

// ============================================================================
// list
// ============================================================================

#[derive(Serialize)]
struct ListJson<'a, T: Serialize> {
    collection: Collection,
    state: &'a FilterState,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    page: Page<&'a T>,
}

/// `folio list`: one page of a filtered, searched, sorted collection.
pub fn handle_list(store: &ContentStore, args: &ListArgs, default_per_page: usize) -> Result<()> {
    let output = list_output(store, args, default_per_page)?;
    print!("{output}");
    Ok(())
}

pub(crate) fn list_output(
    store: &ContentStore,
    args: &ListArgs,
    default_per_page: usize,
) -> Result<String> {
    let state = FilterState::new()
        .with_filter(args.filter.clone())
        .with_search(args.search.clone())
        .with_sort(args.sort)
        .with_layout(args.layout);
    let per_page = args.per_page.unwrap_or(default_per_page);

    with_collection!(store, args.collection, |items| {
        let page = query(items, &state, args.page, per_page);
        if args.json {
            let message = (page.total_items == 0).then(|| args.collection.empty_message());
            let json = ListJson {
                collection: args.collection,
                state: &state,
                message,
                page,
            };
            to_json_line(&json)
        } else {
            Ok(format_page(args.collection, &page, state.layout))
        }
    })
}

fn format_page<T: ContentItem>(collection: Collection, page: &Page<&T>, layout: Layout) -> String {
    if page.total_items == 0 {
        return format!("{}\n", collection.empty_message());
    }

    let mut out = String::new();
    for item in &page.items {
        match layout {
            Layout::List => {
                let _ = write!(out, "{}", item.title());
                if let Some(meta) = item_meta(*item) {
                    let _ = write!(out, "  ({meta})");
                }
                out.push('\n');
            }
            Layout::Grid => {
                let _ = writeln!(out, "{}", item.title());
                if !item.description().is_empty() {
                    let _ = writeln!(out, "  {}", item.description());
                }
                if !item.tags().is_empty() {
                    let _ = writeln!(out, "  tags: {}", item.tags().join(", "));
                }
                if let Some(meta) = item_meta(*item) {
                    let _ = writeln!(out, "  {meta}");
                }
                out.push('\n');
            }
        }
    }
    let _ = writeln!(
        out,
        "page {} of {} ({} {})",
        page.page,
        page.total_pages,
        page.total_items,
        if page.total_items == 1 { "item" } else { "items" }
    );
    out
}

/// Date, price, and category, whichever the item has.
fn item_meta<T: ContentItem + ?Sized>(item: &T) -> Option<String> {
    let parts: Vec<&str> = [item.date(), item.price(), item.category()]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" | "))
}

// ============================================================================
// filters
// ============================================================================

/// `folio filters`: `"All"` plus every tag and category, one per line.
pub fn handle_filters(store: &ContentStore, collection: Collection) -> Result<()> {
    print!("{}", filters_output(store, collection));
    Ok(())
}

pub(crate) fn filters_output(store: &ContentStore, collection: Collection) -> String {
    let filters = with_collection!(store, collection, |items| available_filters(items));
    filters.into_iter().map(|f| f + "\n").collect()
}

// ============================================================================
// search
// ============================================================================

#[derive(Serialize)]
struct SearchJson<'a, T: Serialize> {
    query: &'a str,
    items: &'a [&'a T],
}

/// `folio search`: apply debounced queries read from stdin.
pub async fn handle_search(store: &ContentStore, args: &SearchArgs, delay: Duration) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let applied = search_output(store, args, delay, stdin, |chunk| print!("{chunk}")).await?;
    log::debug!("applied {applied} settled search queries");
    Ok(())
}

pub(crate) async fn search_output<R, F>(
    store: &ContentStore,
    args: &SearchArgs,
    delay: Duration,
    reader: R,
    mut emit: F,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String),
{
    let base = FilterState::new()
        .with_filter(args.filter.clone())
        .with_sort(args.sort);

    with_collection!(store, args.collection, |items| {
        debounced_queries(reader, delay, |search| {
            let state = base.clone().with_search(search);
            let visible = filter_sort_search(items, &state);
            let chunk = if args.json {
                to_json_line(&SearchJson {
                    query: search,
                    items: &visible,
                })?
            } else {
                format_search(args.collection, search, &visible)
            };
            emit(chunk);
            Ok(())
        })
        .await
    })
}

fn format_search<T: ContentItem>(collection: Collection, search: &str, visible: &[&T]) -> String {
    let mut out = format!("> {search}\n");
    if visible.is_empty() {
        let _ = writeln!(out, "  {}", collection.empty_message());
    }
    for item in visible {
        let _ = writeln!(out, "  {}", item.title());
    }
    out
}

/// Read lines from `reader` as search input and call `on_query` once per
/// settled query. Returns how many queries were applied.
///
/// Lines that arrive faster than `delay` coalesce, so piped input usually
/// settles once.
///
/// At end of input the last pending query still settles before returning.
pub(crate) async fn debounced_queries<R, F>(
    reader: R,
    delay: Duration,
    mut on_query: F,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str) -> Result<()>,
{
    let (debouncer, mut settled) = Debouncer::spawn(delay);
    let mut lines = reader.lines();
    let mut applied = 0;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(input) => {
                    debouncer.push(input);
                }
                None => break,
            },
            Some(search) = settled.recv() => {
                on_query(&search)?;
                applied += 1;
            }
        }
    }

    while let Ok(Some(search)) = tokio::time::timeout(delay * 2, settled.recv()).await {
        on_query(&search)?;
        applied += 1;
    }
    Ok(applied)
}

// ============================================================================
// render
// ============================================================================

/// `folio render`: a markdown file as HTML, or its table of contents.
pub async fn handle_render(file: &Path, toc: bool, options: RenderOptions) -> Result<()> {
    let content = files::read_file(file).await?;
    print!("{}", render_output(&content, toc, options));
    Ok(())
}

pub(crate) fn render_output(content: &str, toc: bool, options: RenderOptions) -> String {
    let body = split_frontmatter(content).map_or(content, |(_, body)| body);
    let doc = markdown::render_with(body, options);
    if toc {
        format_toc(&doc.headings)
    } else {
        doc.html + "\n"
    }
}

fn format_toc(headings: &[Heading]) -> String {
    let top = headings.iter().map(|h| h.level).min().unwrap_or(1);
    let mut out = String::new();
    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level - top));
        let _ = writeln!(out, "{indent}- [{}](#{})", heading.text, heading.id);
    }
    out
}

// ============================================================================
// skills / playlist
// ============================================================================

pub fn handle_skills(store: &ContentStore, category: Option<&str>) -> Result<()> {
    print!("{}", skills_output(&store.skills, category));
    Ok(())
}

pub(crate) fn skills_output(groups: &[SkillGroup], category: Option<&str>) -> String {
    let skills = skills_in_group(groups, category.unwrap_or(ALL_FILTER));
    if skills.is_empty() {
        return "No skills found\n".to_string();
    }

    let mut out = String::new();
    for flat in skills {
        let level = flat.skill.level();
        let bar = "#".repeat(usize::from(level / 10));
        let _ = writeln!(
            out,
            "{:<14} {:<18} {:>3}% {bar}",
            flat.group, flat.skill.name, level
        );
    }
    out
}

pub fn handle_playlist(store: &ContentStore) -> Result<()> {
    print!("{}", playlist_output(&store.playlist));
    Ok(())
}

pub(crate) fn playlist_output(playlist: &Playlist) -> String {
    if playlist.is_empty() {
        return "Playlist is empty\n".to_string();
    }

    let mut out = String::new();
    for (index, track) in playlist.tracks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} - {} ({})",
            index + 1,
            track.title,
            track.artist,
            format_duration(u64::from(track.duration_secs))
        );
    }
    let _ = writeln!(
        out,
        "{} tracks, {}",
        playlist.len(),
        format_duration(playlist.total_duration_secs())
    );
    out
}

// ============================================================================
// mailto
// ============================================================================

/// `folio mailto`: print the `mailto:` URL for a contact message.
pub fn handle_mailto(args: MailtoArgs, default_recipient: &str) -> Result<()> {
    println!("{}", mailto_output(args, default_recipient)?);
    Ok(())
}

pub(crate) fn mailto_output(args: MailtoArgs, default_recipient: &str) -> Result<String> {
    let recipient = args.to.unwrap_or_else(|| default_recipient.to_string());
    let message = ContactMessage {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    message.mailto_url(&recipient)
}

// ============================================================================
// Helpers
// ============================================================================

fn to_json_line<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map(|json| json + "\n")
        .map_err(|e| folio_core::Error::invalid_data(format!("JSON output: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
