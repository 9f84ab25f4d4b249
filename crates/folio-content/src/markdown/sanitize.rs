//! HTML sanitizing.
//!
//! Strips scripts, event-handler attributes, and non-web URL schemes while
//! keeping the markup the pipeline itself produces: heading ids, highlight
//! classes, and the `data-*` attributes on code blocks.

use ammonia::Builder;
use std::sync::LazyLock;

static SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .add_generic_attributes(&["class", "id"])
        .add_generic_attribute_prefixes(&["data-"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_tags(&["input"]);
    builder
});

/// Sanitize rendered HTML.
pub fn sanitize(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}
