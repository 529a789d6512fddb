//! Remote platform clients
//!
//! The pipeline only talks to the platform through two traits:
//! [`ChannelSource`] enumerates a channel's uploads and [`CaptionSource`]
//! fetches the caption track for one video. The concrete clients here back
//! them with the YouTube Data API and the `yt-transcript-rs` crate; tests
//! substitute in-memory fakes.

mod captions;
mod data_api;

pub use captions::TranscriptApiCaptions;
pub use data_api::DataApiClient;

use crate::error::{CaptionError, Error, Result};
use crate::types::{CaptionTrack, Item, ListingPage};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Paged listing of a channel's upload feed
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Resolve the feed (playlist) holding a channel's uploads
    async fn uploads_feed(&self, channel_id: &str) -> Result<String>;

    /// Fetch one page of the feed, starting at `page_token` (None = first page)
    async fn list_page(&self, feed_id: &str, page_token: Option<&str>) -> Result<ListingPage>;

    /// Fetch every item in the channel's upload feed, following continuation
    /// tokens until the platform stops returning one
    async fn list_all(&self, channel_id: &str) -> Result<Vec<Item>> {
        let feed_id = self.uploads_feed(channel_id).await?;
        let mut items = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(&feed_id, page_token.as_deref()).await?;
            debug!(
                feed_id = %feed_id,
                page_items = page.items.len(),
                has_next = page.next_page_token.is_some(),
                "Fetched listing page"
            );
            items.extend(page.items);

            match page.next_page_token {
                Some(token) => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(Error::Listing(format!(
                            "feed {feed_id} repeated page token {token}"
                        )));
                    }
                    page_token = Some(token);
                }
                None => break,
            }
        }

        Ok(items)
    }
}

/// Caption track lookup for a single video
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch the caption track for `video_id`
    async fn fetch_captions(
        &self,
        video_id: &str,
    ) -> std::result::Result<CaptionTrack, CaptionError>;
}
