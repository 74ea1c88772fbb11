//! Client for the video-search provider (Invidious-compatible API).
use serde::Deserialize;

use super::{Candidate, LookupError, LookupOutcome};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Wraps an Invidious-style `/api/v1/search` endpoint and returns the
/// single top-ranked video.
#[derive(Debug, Clone)]
pub struct VideoSearchClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct VideoHit {
    #[serde(default)]
    title: String,
    #[serde(rename = "videoId", default)]
    video_id: String,
    #[serde(rename = "videoThumbnails", default)]
    thumbnails: Vec<VideoThumbnail>,
}

#[derive(Debug, Deserialize)]
struct VideoThumbnail {
    url: String,
}

impl VideoSearchClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Searches for videos and keeps only the top-ranked hit.
    pub async fn search(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        let response = self
            .http
            .get(format!("{}/api/v1/search", self.base_url))
            .query(&[("q", query), ("type", "video")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Provider(status.to_string()));
        }

        let hits: Vec<VideoHit> = response.json().await?;
        let Some(top) = hits.into_iter().find(|hit| !hit.video_id.is_empty()) else {
            return Ok(LookupOutcome::Empty);
        };

        Ok(LookupOutcome::Found(vec![Candidate {
            title: top.title,
            link: format!("{}{}", WATCH_URL, top.video_id),
            context_link: None,
            thumbnail: top.thumbnails.into_iter().next().map(|thumb| thumb.url),
        }]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> VideoSearchClient {
        VideoSearchClient::new(crate::config::build_http_client().unwrap(), &server.uri())
    }

    #[tokio::test]
    async fn returns_the_top_ranked_video() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .and(query_param("q", "rust tutorial"))
            .and(query_param("type", "video"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "title": "Rust in 10 minutes",
                    "videoId": "abc123",
                    "videoThumbnails": [{"url": "https://img.example/abc123.jpg"}]
                },
                {"title": "Second hit", "videoId": "def456", "videoThumbnails": []}
            ])))
            .mount(&server)
            .await;

        let outcome = client(&server).search("rust tutorial").await.unwrap();
        match outcome {
            LookupOutcome::Found(candidates) => {
                assert_eq!(candidates.len(), 1);
                assert_eq!(candidates[0].title, "Rust in 10 minutes");
                assert_eq!(candidates[0].link, "https://www.youtube.com/watch?v=abc123");
                assert_eq!(
                    candidates[0].thumbnail.as_deref(),
                    Some("https://img.example/abc123.jpg")
                );
            }
            LookupOutcome::Empty => panic!("expected a candidate"),
        }
    }

    #[tokio::test]
    async fn no_hits_map_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let outcome = client(&server).search("nothing at all").await.unwrap();
        assert!(matches!(outcome, LookupOutcome::Empty));
    }

    #[tokio::test]
    async fn provider_failure_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).search("anything").await.unwrap_err();
        assert!(matches!(err, LookupError::Provider(_)));
    }
}
