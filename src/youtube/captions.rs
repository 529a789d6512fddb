//! Caption tracks via `yt-transcript-rs`

use super::CaptionSource;
use crate::config::YouTubeConfig;
use crate::error::{CaptionError, Error, Result};
use crate::types::{CaptionSegment, CaptionTrack};
use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches caption tracks through the public transcript endpoint
pub struct TranscriptApiCaptions {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl TranscriptApiCaptions {
    /// Create a caption client preferring the configured languages
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| Error::Other(format!("Failed to create transcript client: {}", e)))?;

        Ok(Self {
            api,
            languages: config.caption_languages.clone(),
        })
    }
}

#[async_trait]
impl CaptionSource for TranscriptApiCaptions {
    async fn fetch_captions(
        &self,
        video_id: &str,
    ) -> std::result::Result<CaptionTrack, CaptionError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| CaptionError::classify(&e.to_string()))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| CaptionSegment::new(snippet.start, snippet.text))
            .collect::<Vec<_>>()
            .into())
    }
}
