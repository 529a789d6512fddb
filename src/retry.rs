//! Caption-fetch retry policy
//!
//! Caption fetches fail for reasons that differ in whether a second attempt
//! can help. Disabled or missing captions are final; rate limits and other
//! failures get a fixed delay and another try, up to
//! [`RetryConfig::max_attempts`] attempts in total.
//!
//! # Example
//!
//! ```no_run
//! use episode_transcripts::config::RetryConfig;
//! use episode_transcripts::retry::fetch_captions_with_retry;
//! use episode_transcripts::youtube::CaptionSource;
//!
//! # async fn example(source: &dyn CaptionSource) {
//! let config = RetryConfig::default();
//! match fetch_captions_with_retry(&config, source, "dQw4w9WgXcQ").await {
//!     Some(track) => println!("{} lines", track.len()),
//!     None => println!("no transcript"),
//! }
//! # }
//! ```

use crate::config::RetryConfig;
use crate::error::CaptionError;
use crate::types::CaptionTrack;
use crate::youtube::CaptionSource;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Classifies an error into "wait this long and retry" or "give up now"
pub trait RetryClass {
    /// Delay before the next attempt, or `None` when retrying cannot help
    fn retry_delay(&self, config: &RetryConfig) -> Option<Duration>;
}

impl RetryClass for CaptionError {
    fn retry_delay(&self, config: &RetryConfig) -> Option<Duration> {
        if self.is_terminal() {
            return None;
        }
        match self {
            CaptionError::RateLimited(_) => Some(config.rate_limit_delay),
            _ => Some(config.retry_delay),
        }
    }
}

/// Run an async operation under the retry policy
///
/// Makes at most `config.max_attempts` attempts (a value of 0 still makes
/// one). Returns the first success, or the last error once the error is
/// terminal or attempts are exhausted.
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryClass + std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    tracing::info!(attempts = attempt, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) => match e.retry_delay(config) {
                Some(delay) if attempt < max_attempts => {
                    let delay = if config.jitter { add_jitter(delay) } else { delay };

                    tracing::warn!(
                        error = %e,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        delay_ms = delay.as_millis(),
                        "Operation failed, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Some(_) => {
                    tracing::warn!(
                        error = %e,
                        attempts = attempt,
                        "Operation failed after all retry attempts exhausted"
                    );
                    return Err(e);
                }
                None => {
                    tracing::debug!(error = %e, "Operation failed with non-retryable error");
                    return Err(e);
                }
            },
        }
    }
}

/// Fetch a caption track, absorbing every failure into `None`
///
/// A track with zero segments is treated the same as a missing one and is
/// not retried.
pub async fn fetch_captions_with_retry(
    config: &RetryConfig,
    source: &dyn CaptionSource,
    video_id: &str,
) -> Option<CaptionTrack> {
    match with_retry(config, move || source.fetch_captions(video_id)).await {
        Ok(track) if track.is_empty() => {
            tracing::info!(video_id, "Caption track is empty");
            None
        }
        Ok(track) => {
            tracing::debug!(video_id, segments = track.len(), "Fetched caption track");
            Some(track)
        }
        Err(e) => {
            tracing::info!(video_id, error = %e, "No transcript available");
            None
        }
    }
}

/// Add random jitter to a delay
///
/// Jitter is uniformly distributed between 0% and 100% of the delay, so the
/// result lies between `delay` and `2 * delay`.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    Duration::from_secs_f64(delay.as_secs_f64() * (1.0 + jitter_factor))
}
