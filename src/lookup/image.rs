//! Client for the image-search provider (Google Custom Search API).
use serde::Deserialize;

use crate::config::ImageSearchConfig;

use super::{Candidate, LookupError, LookupOutcome};

/// Status token in the provider's error body that marks quota exhaustion.
const QUOTA_STATUS: &str = "RESOURCE_EXHAUSTED";

/// How many candidates are requested per search, starting at offset 1.
const RESULT_COUNT: &str = "5";
const RESULT_OFFSET: &str = "1";

/// Wraps the `customsearch/v1` endpoint. Requires an API key and a search
/// engine id (CX); without them the image command stays disabled.
#[derive(Debug, Clone)]
pub struct ImageSearchClient {
    http: reqwest::Client,
    base_url: String,
    config: ImageSearchConfig,
}

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    #[serde(rename = "searchInformation", default)]
    search_information: Option<SearchInformation>,
    #[serde(default)]
    items: Vec<ImageItem>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    #[serde(rename = "totalResults", default)]
    total_results: String,
}

#[derive(Debug, Deserialize)]
struct ImageItem {
    #[serde(default)]
    title: String,
    link: String,
    #[serde(default)]
    image: Option<ImageMeta>,
}

#[derive(Debug, Deserialize, Default)]
struct ImageMeta {
    #[serde(rename = "contextLink")]
    context_link: Option<String>,
    #[serde(rename = "thumbnailLink")]
    thumbnail_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    status: String,
}

impl ImageSearchClient {
    pub fn new(http: reqwest::Client, base_url: &str, config: ImageSearchConfig) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        }
    }

    /// Fetches one batch of image candidates for `query`.
    ///
    /// A non-success status is classified through the structured error
    /// body: `RESOURCE_EXHAUSTED` becomes `QuotaExhausted`, every other
    /// status token becomes `Provider`. A response with zero total results
    /// maps to `Empty`.
    pub async fn search(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        let response = self
            .http
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("q", query),
                ("num", RESULT_COUNT),
                ("start", RESULT_OFFSET),
                ("searchType", "image"),
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.cx.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let err = match response.json::<ApiErrorBody>().await {
                Ok(body) if body.error.status == QUOTA_STATUS => LookupError::QuotaExhausted,
                Ok(body) if !body.error.status.is_empty() => {
                    LookupError::Provider(body.error.status)
                }
                _ => LookupError::Provider(status.to_string()),
            };
            return Err(err);
        }

        let data: ImageSearchResponse = response.json().await?;
        let no_results = data
            .search_information
            .map_or(false, |info| info.total_results == "0");
        if no_results || data.items.is_empty() {
            return Ok(LookupOutcome::Empty);
        }

        let candidates = data
            .items
            .into_iter()
            .map(|item| {
                let image = item.image.unwrap_or_default();
                Candidate {
                    title: item.title,
                    link: item.link,
                    context_link: image.context_link,
                    thumbnail: image.thumbnail_link,
                }
            })
            .collect();
        Ok(LookupOutcome::Found(candidates))
    }
}
