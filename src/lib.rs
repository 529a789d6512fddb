//! # episode-transcripts
//!
//! Publishes a YouTube channel's episodes as static transcript pages.
//!
//! A run lists every upload of the configured channel, fetches each video's
//! caption track (retrying rate limits and transient failures with fixed
//! delays), renders one `episode-<id>.html` page per video plus an
//! `index.html`, and writes them into the output directory. Videos without
//! captions still get a page, with a note pointing to the video instead of
//! the transcript.
//!
//! ## Quick Start
//!
//! ```no_run
//! use episode_transcripts::{Config, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads YOUTUBE_API_KEY (and optional overrides) from the environment
//!     let config = Config::from_env();
//!
//!     let pipeline = Pipeline::connect(config)?;
//!     let summary = pipeline.run().await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```
//!
//! The platform clients sit behind the [`ChannelSource`] and
//! [`CaptionSource`] traits, so `Pipeline::new` accepts any implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Batch run driver
pub mod pipeline;
/// HTML rendering
pub mod render;
/// Caption-fetch retry policy
pub mod retry;
/// Core data types
pub mod types;
/// Utility functions
pub mod utils;
/// Remote platform clients
pub mod youtube;

// Re-export commonly used types
pub use config::{Config, ConfigOverrides, RetryConfig, SiteConfig, YouTubeConfig};
pub use error::{CaptionError, Error, Result};
pub use pipeline::Pipeline;
pub use types::{CaptionSegment, CaptionTrack, Item, ListingPage, RenderedPage, RunSummary};
pub use youtube::{CaptionSource, ChannelSource, DataApiClient, TranscriptApiCaptions};
