//! HTML rendering for episode and index pages
//!
//! Everything in this module is pure: an [`Item`](crate::types::Item) (and
//! its caption track, if any) goes in, a [`RenderedPage`] comes out. No I/O,
//! no clock, so identical input always yields byte-identical output.
//!
//! All interpolated text is escaped with [`escape_html`], whether it lands in
//! element content or in an attribute value.

mod episode;
mod index;
mod style;

pub use episode::render_episode_page;
pub use index::render_index_page;

use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// File name of the index page
pub const INDEX_FILE_NAME: &str = "index.html";

/// Characters of description kept in an index card snippet
pub const SNIPPET_CHARS: usize = 200;

/// File name of an item's episode page: `episode-<id>.html`
pub fn episode_file_name(video_id: &str) -> String {
    format!("episode-{video_id}.html")
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in element content or a quoted
/// attribute value
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Format a caption offset as `MM:SS`
///
/// Minutes are not wrapped into hours, so 3600 seconds is `60:00`. Negative
/// and non-finite offsets render as `00:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format a publish instant as `Month DD, YYYY` (e.g. "March 05, 2024")
pub fn format_publish_date(published_at: &DateTime<Utc>) -> String {
    published_at.format("%B %d, %Y").to_string()
}

/// First [`SNIPPET_CHARS`] characters of a description, escaped, with `...`
/// appended when anything was cut
pub fn description_snippet(description: &str) -> String {
    match description.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", escape_html(&description[..cut])),
        None => escape_html(description).into_owned(),
    }
}
