//! YouTube Data API v3 listing client

use super::ChannelSource;
use crate::config::YouTubeConfig;
use crate::error::{Error, Result};
use crate::types::{Item, ListingPage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Lists a channel's uploads through the YouTube Data API
pub struct DataApiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl DataApiClient {
    /// Create a client from the platform configuration
    ///
    /// # Errors
    /// Returns a configuration error if the base URL is not a valid URL, or
    /// an error if the HTTP client cannot be created
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        url::Url::parse(&config.api_base_url).map_err(|e| {
            Error::config(
                "youtube.api_base_url",
                format!("invalid URL {}: {}", config.api_base_url, e),
            )
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("episode-transcripts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// GET `{base_url}/{endpoint}` and decode the JSON body
    ///
    /// The key is added as a query parameter here and never appears in logs
    /// or error messages.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "Requesting Data API");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Error::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = api_error_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unknown").to_string()
            });
            return Err(Error::Listing(format!(
                "{} returned HTTP {}: {}",
                url,
                status.as_u16(),
                detail
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.without_url()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ChannelSource for DataApiClient {
    async fn uploads_feed(&self, channel_id: &str) -> Result<String> {
        let response: ChannelListResponse = self
            .get_json("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;

        response
            .items
            .into_iter()
            .next()
            .map(|channel| channel.content_details.related_playlists.uploads)
            .ok_or_else(|| Error::Listing(format!("channel {channel_id} not found")))
    }

    async fn list_page(&self, feed_id: &str, page_token: Option<&str>) -> Result<ListingPage> {
        let page_size = self.page_size.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("playlistId", feed_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response: PlaylistItemListResponse = self.get_json("playlistItems", &query).await?;

        Ok(ListingPage {
            items: response
                .items
                .into_iter()
                .map(|resource| resource.snippet.into_item())
                .collect(),
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Pull `error.message` out of a Data API error body
fn api_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
}

#[derive(Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelResource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelResource {
    content_details: ChannelContentDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItemResource>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct PlaylistItemResource {
    snippet: PlaylistItemSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    published_at: DateTime<Utc>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    resource_id: ResourceId,
}

impl PlaylistItemSnippet {
    fn into_item(self) -> Item {
        // Private and deleted videos come back without thumbnails
        let thumbnail_url = [self.thumbnails.high, self.thumbnails.medium, self.thumbnails.default]
            .into_iter()
            .flatten()
            .map(|t| t.url)
            .next()
            .unwrap_or_default();

        Item {
            id: self.resource_id.video_id,
            title: self.title,
            description: self.description,
            published_at: self.published_at,
            thumbnail_url,
        }
    }
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}
