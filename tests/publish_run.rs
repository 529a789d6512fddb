//! End-to-end runs against a mock Data API and scripted captions

mod common;

use common::*;
use episode_transcripts::youtube::DataApiClient;
use episode_transcripts::{CaptionError, CaptionSegment, CaptionTrack, Error, Pipeline, RunSummary};
use tempfile::TempDir;

fn track(lines: &[(f64, &str)]) -> CaptionTrack {
    CaptionTrack::new(
        lines
            .iter()
            .map(|(start, text)| CaptionSegment::new(*start, *text))
            .collect(),
    )
}

fn two_page_listing() -> Vec<Vec<serde_json::Value>> {
    vec![
        vec![
            playlist_item(
                "newest01",
                "Episode 3: <Robots> & Rights",
                &"A very long description. ".repeat(20),
                "2024-03-05T17:00:00Z",
            ),
            playlist_item("middle02", "Episode 2", "Short one", "2024-02-01T17:00:00Z"),
        ],
        vec![playlist_item(
            "oldest03",
            "Episode 1",
            "",
            "2024-01-10T17:00:00Z",
        )],
    ]
}

#[tokio::test]
async fn test_full_run_publishes_every_episode() {
    let server = start_data_api(two_page_listing()).await;
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("site");
    let config = test_config(&server, &out);

    let captions = ScriptedCaptions::default()
        .script(
            "newest01",
            vec![
                Err(CaptionError::RateLimited("429 Too Many Requests".to_string())),
                Ok(track(&[(0.0, "Welcome <back>"), (65.2, "Let's begin")])),
            ],
        )
        .script("middle02", vec![Err(CaptionError::Disabled)])
        .script(
            "oldest03",
            vec![
                Err(CaptionError::Transient("connection reset".to_string())),
                Err(CaptionError::Transient("connection reset".to_string())),
            ],
        );

    let listing = DataApiClient::new(&config.youtube).unwrap();
    let pipeline = Pipeline::new(config, listing, captions.clone());
    let summary = pipeline.run().await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            total: 3,
            succeeded: 1,
            failed: 2
        }
    );
    assert_eq!(summary.to_string(), "Processed 3 episodes: 1 with transcripts, 2 without");

    assert_pages_for(&out, &["newest01", "middle02", "oldest03"]);
    assert_eq!(
        index_links(&out),
        vec![
            "episode-newest01.html",
            "episode-middle02.html",
            "episode-oldest03.html"
        ],
        "index keeps listing order across pages"
    );

    assert_eq!(captions.calls_for("newest01"), 2, "rate limit retried once");
    assert_eq!(captions.calls_for("middle02"), 1, "disabled never retried");
    assert_eq!(captions.calls_for("oldest03"), 2, "transient retried up to the limit");

    let newest = read_page(&out, "episode-newest01.html");
    assert!(newest.contains("[00:00]</span> Welcome &lt;back&gt;"));
    assert!(newest.contains("[01:05]</span> Let&#39;s begin"));
    assert!(newest.contains("<h1>Episode 3: &lt;Robots&gt; &amp; Rights</h1>"));

    let middle = read_page(&out, "episode-middle02.html");
    assert!(middle.contains("Transcript not available for this episode."));
    assert!(middle.contains("https://www.youtube.com/watch?v=middle02"));

    let index = read_page(&out, "index.html");
    assert!(index.contains("March 05, 2024"));
    assert!(index.contains("https://i.ytimg.com/vi/newest01/hqdefault.jpg"));
    let long = "A very long description. ".repeat(20);
    let snippet: String = long.chars().take(200).collect();
    assert!(index.contains(&format!("<p class=\"episode-snippet\">{snippet}...</p>")));
}

#[tokio::test]
async fn test_rerun_produces_identical_files() {
    let server = start_data_api(two_page_listing()).await;
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("site");

    let captions = ScriptedCaptions::default()
        .script("newest01", vec![Ok(track(&[(1.0, "one")])), Ok(track(&[(1.0, "one")]))])
        .script("middle02", vec![Err(CaptionError::NotFound), Err(CaptionError::NotFound)]);

    let config = test_config(&server, &out);
    let listing = DataApiClient::new(&config.youtube).unwrap();
    let pipeline = Pipeline::new(config, listing, captions);

    pipeline.run().await.unwrap();
    let first = read_output(&out);

    pipeline.run().await.unwrap();
    let second = read_output(&out);

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_failure_is_fatal() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("site");
    let config = test_config(&server, &out);
    let captions = ScriptedCaptions::default();

    let listing = DataApiClient::new(&config.youtube).unwrap();
    let pipeline = Pipeline::new(config, listing, captions.clone());

    match pipeline.run().await {
        Err(Error::Listing(msg)) => assert!(msg.contains("500")),
        other => panic!("expected listing failure, got {other:?}"),
    }
    assert!(!out.exists(), "nothing is written when listing fails");
    assert!(captions.calls().is_empty());
}

#[tokio::test]
async fn test_write_failure_is_fatal() {
    let server = start_data_api(two_page_listing()).await;
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("site");
    std::fs::write(&out, "a file where the directory should be").unwrap();

    let config = test_config(&server, &out);
    let listing = DataApiClient::new(&config.youtube).unwrap();
    let pipeline = Pipeline::new(config, listing, ScriptedCaptions::default());

    assert!(matches!(pipeline.run().await, Err(Error::Write { .. })));
}
