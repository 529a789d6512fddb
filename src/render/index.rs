use super::style::{BASE_CSS, INDEX_CSS};
use super::{
    INDEX_FILE_NAME, description_snippet, episode_file_name, escape_html, format_publish_date,
};
use crate::config::SiteConfig;
use crate::types::{Item, RenderedPage};

/// Render the index page listing every item, in the given order
///
/// Each card carries exactly one link, to the item's episode page.
pub fn render_index_page(site: &SiteConfig, items: &[Item]) -> RenderedPage {
    let site_name = escape_html(&site.site_name);
    let home_href = escape_html(&site.home_href);

    let cards = if items.is_empty() {
        r#"        <p class="no-episodes">No episodes have been published yet.</p>"#.to_string()
    } else {
        items.iter().map(episode_card).collect::<Vec<_>>().join("\n")
    };

    let count = match items.len() {
        1 => "1 episode".to_string(),
        n => format!("{n} episodes"),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Episode Transcripts | {site_name}</title>
    <meta name="description" content="Full transcripts of every {site_name} episode">
    <style>{BASE_CSS}{INDEX_CSS}    </style>
</head>
<body>
    <div class="container">
        <a href="{home_href}" class="back-link">&larr; Home</a>
        <h1>Episode Transcripts</h1>
        <p class="subtitle">{site_name} &middot; {count}</p>
{cards}
    </div>
</body>
</html>
"#
    );

    RenderedPage {
        file_name: INDEX_FILE_NAME.to_string(),
        html,
    }
}

fn episode_card(item: &Item) -> String {
    let title = escape_html(&item.title);
    let href = episode_file_name(&item.id);
    let href = escape_html(&href);
    let date = format_publish_date(&item.published_at);
    let snippet = description_snippet(&item.description);

    let thumbnail = if item.thumbnail_url.is_empty() {
        String::new()
    } else {
        format!(
            "            <img class=\"thumbnail\" src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape_html(&item.thumbnail_url),
            title
        )
    };

    format!(
        r#"        <article class="episode-card">
{thumbnail}            <div class="episode-info">
                <h2>{title}</h2>
                <p class="episode-date">{date}</p>
                <p class="episode-snippet">{snippet}</p>
                <a href="{href}" class="read-link">Read transcript &rarr;</a>
            </div>
        </article>"#
    )
}
