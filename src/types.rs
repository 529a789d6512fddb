//! Core types for episode-transcripts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published video, the unit of processing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable platform identifier (e.g. "dQw4w9WgXcQ")
    pub id: String,

    /// Video title, raw text
    pub title: String,

    /// Video description, raw text (may be empty)
    pub description: String,

    /// Publication instant
    pub published_at: DateTime<Utc>,

    /// Thumbnail URL (empty when the platform supplied none)
    pub thumbnail_url: String,
}

/// One timed line of a caption track
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Offset from the start of the video, in seconds
    pub start: f64,

    /// Caption text, raw
    pub text: String,
}

impl CaptionSegment {
    /// Create a new segment
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// The full transcript of one item, ordered by start offset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptionTrack(pub Vec<CaptionSegment>);

impl CaptionTrack {
    /// Wrap already-ordered segments
    pub fn new(segments: Vec<CaptionSegment>) -> Self {
        Self(segments)
    }

    /// Segments in playback order
    pub fn segments(&self) -> &[CaptionSegment] {
        &self.0
    }

    /// True when the track holds no segments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<CaptionSegment>> for CaptionTrack {
    fn from(segments: Vec<CaptionSegment>) -> Self {
        Self(segments)
    }
}

/// One page of the channel listing
#[derive(Clone, Debug, Default)]
pub struct ListingPage {
    /// Items on this page, in upload-feed order
    pub items: Vec<Item>,

    /// Continuation token for the next page, if any
    pub next_page_token: Option<String>,
}

/// A finished HTML document and the file name it is written under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// File name relative to the output directory
    pub file_name: String,

    /// Complete HTML document
    pub html: String,
}

/// Aggregate outcome of one pipeline run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Items listed (and episode pages written)
    pub total: usize,

    /// Items rendered with a transcript
    pub succeeded: usize,

    /// Items rendered with the fallback block
    pub failed: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} episodes: {} with transcripts, {} without",
            self.total, self.succeeded, self.failed
        )
    }
}
