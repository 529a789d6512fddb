//! Configuration types for episode-transcripts

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the YouTube Data API key
pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";
/// Environment variable overriding the channel to publish
pub const ENV_CHANNEL_ID: &str = "YOUTUBE_CHANNEL_ID";
/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "TRANSCRIPTS_OUTPUT_DIR";

/// Remote platform settings (credential, channel, endpoints)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// YouTube Data API key (never serialized back out)
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Channel whose uploads are published
    #[serde(default = "default_channel_id")]
    pub channel_id: String,

    /// Base URL of the Data API (default: "https://www.googleapis.com/youtube/v3")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Items requested per listing page (default: 50, the API maximum)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Preferred caption languages, most preferred first (default: ["en"])
    #[serde(default = "default_caption_languages")]
    pub caption_languages: Vec<String>,

    /// HTTP request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            channel_id: default_channel_id(),
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            caption_languages: default_caption_languages(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Output site settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory the pages are written into (default: "transcriptions")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name shown in page titles (default: "Artificial Insanity Podcast")
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Link from the index page up to the site home (default: "../index.html")
    #[serde(default = "default_home_href")]
    pub home_href: String,

    /// Prefix for canonical watch links; the video id is appended
    #[serde(default = "default_watch_url_base")]
    pub watch_url_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            site_name: default_site_name(),
            home_href: default_home_href(),
            watch_url_base: default_watch_url_base(),
        }
    }
}

impl SiteConfig {
    /// Canonical watch page for a video
    pub fn watch_url(&self, video_id: &str) -> String {
        format!("{}{}", self.watch_url_base, video_id)
    }
}

/// Caption-fetch retry configuration
///
/// Delays are fixed per error kind rather than growing exponentially: a rate
/// limit waits `rate_limit_delay`, anything else waits `retry_delay`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one (default: 2)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay after a transient failure (default: 3 seconds)
    #[serde(default = "default_retry_delay", with = "duration_serde")]
    pub retry_delay: Duration,

    /// Delay after a rate-limit failure (default: 5 seconds)
    #[serde(default = "default_rate_limit_delay", with = "duration_serde")]
    pub rate_limit_delay: Duration,

    /// Add random jitter to delays (default: false)
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay: default_retry_delay(),
            rate_limit_delay: default_rate_limit_delay(),
            jitter: false,
        }
    }
}

/// Values given on the command line, applied over file and environment
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Replaces `site.output_dir`
    pub output_dir: Option<PathBuf>,
    /// Replaces `youtube.channel_id`
    pub channel_id: Option<String>,
}

/// Top-level configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote platform settings
    #[serde(default)]
    pub youtube: YouTubeConfig,

    /// Output site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Caption retry policy
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing sections and fields fall back to their defaults. The API key
    /// is normally left out of the file and supplied through the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read {}: {}", path.display(), e),
            key: None,
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Build the effective configuration for a run
    ///
    /// Layers, lowest precedence first: the JSON file (or defaults when no
    /// file is given), then the environment, then `overrides`.
    pub fn load(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();

        if let Some(dir) = overrides.output_dir {
            config.site.output_dir = dir;
        }
        if let Some(channel_id) = overrides.channel_id {
            config.youtube.channel_id = channel_id;
        }
        Ok(config)
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay values from `YOUTUBE_API_KEY`, `YOUTUBE_CHANNEL_ID` and
    /// `TRANSCRIPTS_OUTPUT_DIR` when they are set and non-empty
    pub fn apply_env(&mut self) {
        if let Some(key) = non_empty_env(ENV_API_KEY) {
            self.youtube.api_key = key;
        }
        if let Some(channel) = non_empty_env(ENV_CHANNEL_ID) {
            self.youtube.channel_id = channel;
        }
        if let Some(dir) = non_empty_env(ENV_OUTPUT_DIR) {
            self.site.output_dir = PathBuf::from(dir);
        }
    }

    /// Reject configurations that cannot authenticate or list a channel
    pub fn validate(&self) -> Result<()> {
        if self.youtube.api_key.trim().is_empty() {
            return Err(Error::config(
                "youtube.api_key",
                format!("API key is not set (export {ENV_API_KEY})"),
            ));
        }
        if self.youtube.channel_id.trim().is_empty() {
            return Err(Error::config("youtube.channel_id", "channel id is empty"));
        }
        if !(1..=50).contains(&self.youtube.page_size) {
            return Err(Error::config(
                "youtube.page_size",
                format!("page size must be 1..=50, got {}", self.youtube.page_size),
            ));
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn default_channel_id() -> String {
    "UC1g-EKfoM_OblzPGBF0N6bQ".to_string()
}

fn default_api_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_page_size() -> u32 {
    50
}

fn default_caption_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("transcriptions")
}

fn default_site_name() -> String {
    "Artificial Insanity Podcast".to_string()
}

fn default_home_href() -> String {
    "../index.html".to_string()
}

fn default_watch_url_base() -> String {
    "https://www.youtube.com/watch?v=".to_string()
}

fn default_max_attempts() -> u32 {
    2
}

fn default_retry_delay() -> Duration {
    Duration::from_secs(3)
}

fn default_rate_limit_delay() -> Duration {
    Duration::from_secs(5)
}

// Duration serialization helper (integer seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
