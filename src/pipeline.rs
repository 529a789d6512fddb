//! One-shot batch run: list, fetch captions, render, write
//!
//! The run is strictly sequential. Items are handled one at a time in
//! listing order; the only waits are the retry policy's backoff sleeps.
//! A listing failure aborts before anything is written. A caption failure
//! only changes which variant of the episode page is written. A write
//! failure aborts the run, leaving already-written pages in place.

use crate::config::Config;
use crate::error::Result;
use crate::render::{render_episode_page, render_index_page};
use crate::retry::fetch_captions_with_retry;
use crate::types::{Item, RunSummary};
use crate::utils::{ensure_output_dir, write_page};
use crate::youtube::{CaptionSource, ChannelSource, DataApiClient, TranscriptApiCaptions};
use tracing::{info, warn};

/// Drives a full publishing run against a channel listing and a caption source
pub struct Pipeline<L, C> {
    config: Config,
    listing: L,
    captions: C,
}

impl Pipeline<DataApiClient, TranscriptApiCaptions> {
    /// Build a pipeline backed by the live YouTube clients
    ///
    /// # Errors
    /// Returns a configuration error if the configuration does not validate,
    /// or an error if either client cannot be created
    pub fn connect(config: Config) -> Result<Self> {
        config.validate()?;
        let listing = DataApiClient::new(&config.youtube)?;
        let captions = TranscriptApiCaptions::new(&config.youtube)?;
        Ok(Self::new(config, listing, captions))
    }
}

impl<L, C> Pipeline<L, C>
where
    L: ChannelSource,
    C: CaptionSource,
{
    /// Create a pipeline from explicit collaborators
    pub fn new(config: Config, listing: L, captions: C) -> Self {
        Self {
            config,
            listing,
            captions,
        }
    }

    /// Run the whole batch and report aggregate counts
    ///
    /// # Errors
    /// Returns an error if the listing call fails or a page cannot be written.
    /// Caption failures never surface here.
    pub async fn run(&self) -> Result<RunSummary> {
        let channel_id = self.config.youtube.channel_id.as_str();
        info!(channel_id, "Fetching channel listing");

        let items = self.listing.list_all(channel_id).await?;
        info!(count = items.len(), "Found episodes");

        let summary = self.publish(&items).await?;

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            output_dir = %self.config.site.output_dir.display(),
            "Run complete"
        );
        Ok(summary)
    }

    /// Fetch captions for, render and write every item, then the index
    async fn publish(&self, items: &[Item]) -> Result<RunSummary> {
        let output_dir = self.config.site.output_dir.as_path();
        ensure_output_dir(output_dir).await?;

        let mut summary = RunSummary {
            total: items.len(),
            ..RunSummary::default()
        };

        for (position, item) in items.iter().enumerate() {
            info!(
                video_id = %item.id,
                position = position + 1,
                total = items.len(),
                title = %item.title,
                "Processing episode"
            );

            let captions =
                fetch_captions_with_retry(&self.config.retry, &self.captions, &item.id).await;
            let page = render_episode_page(&self.config.site, item, captions.as_ref());
            write_page(output_dir, &page).await?;

            if captions.is_some() {
                summary.succeeded += 1;
            } else {
                warn!(video_id = %item.id, "Episode published without transcript");
                summary.failed += 1;
            }
        }

        let index = render_index_page(&self.config.site, items);
        write_page(output_dir, &index).await?;

        Ok(summary)
    }
}
