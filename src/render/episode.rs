use super::style::{BASE_CSS, EPISODE_CSS};
use super::{
    INDEX_FILE_NAME, episode_file_name, escape_html, format_publish_date, format_timestamp,
};
use crate::config::SiteConfig;
use crate::types::{CaptionTrack, Item, RenderedPage};

/// Render the transcript page for one item
///
/// An absent or empty caption track renders the fallback block, which points
/// readers at the item's watch page instead.
pub fn render_episode_page(
    site: &SiteConfig,
    item: &Item,
    captions: Option<&CaptionTrack>,
) -> RenderedPage {
    let title = escape_html(&item.title);
    let site_name = escape_html(&site.site_name);
    let watch_url = site.watch_url(&item.id);
    let watch_url = escape_html(&watch_url);
    let date = format_publish_date(&item.published_at);

    let description = if item.description.trim().is_empty() {
        String::new()
    } else {
        format!(
            "        <section class=\"description\">{}</section>\n",
            escape_html(&item.description)
        )
    };

    let transcript = match captions.filter(|track| !track.is_empty()) {
        Some(track) => transcript_lines(track),
        None => fallback_block(&watch_url),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Transcript | {site_name}</title>
    <meta name="description" content="Full transcript of {title} from {site_name}">
    <style>{BASE_CSS}{EPISODE_CSS}    </style>
</head>
<body>
    <div class="container">
        <a href="{INDEX_FILE_NAME}" class="back-link">&larr; All Episodes</a>
        <header>
            <h1>{title}</h1>
            <p class="episode-date">{date}</p>
            <a href="{watch_url}" class="watch-link" target="_blank" rel="noopener">Watch on YouTube</a>
        </header>
{description}        <section class="transcript">
            <h2>Transcript</h2>
{transcript}
        </section>
    </div>
</body>
</html>
"#
    );

    RenderedPage {
        file_name: episode_file_name(&item.id),
        html,
    }
}

fn transcript_lines(track: &CaptionTrack) -> String {
    track
        .segments()
        .iter()
        .map(|segment| {
            format!(
                r#"            <p class="transcript-line"><span class="timestamp">[{}]</span> {}</p>"#,
                format_timestamp(segment.start),
                escape_html(&segment.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fallback_block(watch_url: &str) -> String {
    format!(
        r#"            <div class="no-transcript">
                <p>Transcript not available for this episode.</p>
                <p>Captions may be disabled or not generated yet. <a href="{watch_url}" target="_blank" rel="noopener">Watch the episode on YouTube</a> instead.</p>
            </div>"#
    )
}
