//! Data API responses, a mock API server and a scripted caption source

use async_trait::async_trait;
use episode_transcripts::{CaptionError, CaptionSource, CaptionTrack, Config};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Channel used by every fixture
pub const CHANNEL_ID: &str = "UCtestchannel";
/// Uploads playlist the fixture channel resolves to
pub const UPLOADS_ID: &str = "UUtestchannel";
/// API key the fixture server expects
pub const API_KEY: &str = "fixture-key";

/// One `playlistItems` entry
pub fn playlist_item(video_id: &str, title: &str, description: &str, published: &str) -> Value {
    json!({
        "kind": "youtube#playlistItem",
        "snippet": {
            "publishedAt": published,
            "channelId": CHANNEL_ID,
            "title": title,
            "description": description,
            "thumbnails": {
                "medium": { "url": format!("https://i.ytimg.com/vi/{video_id}/mqdefault.jpg") },
                "high": { "url": format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg") }
            },
            "resourceId": { "kind": "youtube#video", "videoId": video_id }
        }
    })
}

/// Start a Data API mock serving the given pages
///
/// Page N (0-based) is served for `pageToken=tokenN`; every page but the last
/// carries a `nextPageToken` pointing at the following one.
pub async fn start_data_api(pages: Vec<Vec<Value>>) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("id", CHANNEL_ID))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": CHANNEL_ID,
                "contentDetails": { "relatedPlaylists": { "uploads": UPLOADS_ID } }
            }]
        })))
        .mount(&server)
        .await;

    let page_count = pages.len();
    for (n, items) in pages.into_iter().enumerate() {
        let mut body = json!({ "items": items });
        if n + 1 < page_count {
            body["nextPageToken"] = json!(format!("token{}", n + 1));
        }

        let mock = Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("playlistId", UPLOADS_ID));
        let mock = if n == 0 {
            mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        } else {
            mock.and(query_param("pageToken", format!("token{n}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .with_priority(1)
        };
        mock.mount(&server).await;
    }

    server
}

/// Configuration pointing at a mock server and a scratch output directory,
/// with retry delays shortened so tests run quickly
pub fn test_config(server: &MockServer, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.youtube.api_key = API_KEY.to_string();
    config.youtube.channel_id = CHANNEL_ID.to_string();
    config.youtube.api_base_url = server.uri();
    config.site.output_dir = output_dir.to_path_buf();
    config.retry.retry_delay = Duration::from_millis(10);
    config.retry.rate_limit_delay = Duration::from_millis(20);
    config
}

/// Caption source replaying scripted outcomes per video id
///
/// Clones share state, so a test can hand one clone to the pipeline and
/// inspect the calls through another. Videos without a script (or whose
/// script ran out) report `NotFound`.
#[derive(Clone, Default)]
pub struct ScriptedCaptions {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Result<CaptionTrack, CaptionError>>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedCaptions {
    /// Queue outcomes for one video, returned in order on successive calls
    pub fn script(
        self,
        video_id: &str,
        outcomes: Vec<Result<CaptionTrack, CaptionError>>,
    ) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(video_id.to_string(), outcomes.into());
        self
    }

    /// Number of fetches made for a video
    pub fn calls_for(&self, video_id: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|id| *id == video_id)
            .count()
    }

    /// Every fetch in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptionSource for ScriptedCaptions {
    async fn fetch_captions(&self, video_id: &str) -> Result<CaptionTrack, CaptionError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        self.scripts
            .lock()
            .unwrap()
            .get_mut(video_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(CaptionError::NotFound))
    }
}
