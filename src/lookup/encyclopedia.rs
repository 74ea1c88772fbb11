//! Client for the encyclopedia provider (MediaWiki action API).
use serde::Deserialize;

use super::LookupError;

/// Summaries are trimmed to this many sentences by the provider.
const SUMMARY_SENTENCES: &str = "4";
const THUMBNAIL_SIZE: &str = "600";

/// Wraps a MediaWiki `api.php` endpoint.
///
/// `search` returns ranked page titles; `summary` resolves one title into
/// either a plain-text summary, a disambiguation option list, or a
/// missing-page marker. Title lookup is stable: the same title always
/// resolves to the same page (after redirects).
#[derive(Debug, Clone)]
pub struct EncyclopediaClient {
    http: reqwest::Client,
    base_url: String,
}

/// A resolved page: title after redirects, plain-text extract and an
/// optional thumbnail for the success embed.
#[derive(Debug, Clone)]
pub struct PageSummary {
    pub title: String,
    pub extract: String,
    pub thumbnail: Option<String>,
}

/// What a summary request resolved to.
#[derive(Debug, Clone)]
pub enum SummaryOutcome {
    Summary(PageSummary),
    /// The title names a disambiguation page; carries the ordered list of
    /// alternative titles.
    Disambiguation(Vec<String>),
    Missing,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    #[serde(default)]
    query: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct PagesBody {
    #[serde(default)]
    pages: Vec<PageBody>,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    missing: Option<bool>,
    #[serde(default)]
    pageprops: Option<serde_json::Value>,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
    #[serde(default)]
    links: Vec<PageLink>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct PageLink {
    title: String,
}

impl EncyclopediaClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/w/api.php", self.base_url)
    }

    /// Searches for pages matching `query`, returning at most `limit`
    /// titles in ranking order.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, LookupError> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?;

        let body: QueryEnvelope<SearchBody> = read_json(response).await?;
        Ok(body
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    /// Fetches the plain-text summary of `title`.
    ///
    /// Redirects are followed by the provider, so the returned title may
    /// differ from the requested one. Disambiguation pages come back as
    /// `SummaryOutcome::Disambiguation` with their ordered alternatives.
    pub async fn summary(&self, title: &str) -> Result<SummaryOutcome, LookupError> {
        let response = self
            .http
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("prop", "extracts|pageprops|pageimages"),
                ("titles", title),
                ("exsentences", SUMMARY_SENTENCES),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("piprop", "thumbnail"),
                ("pithumbsize", THUMBNAIL_SIZE),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?;

        let body: QueryEnvelope<PagesBody> = read_json(response).await?;
        let Some(page) = body.query.and_then(|q| q.pages.into_iter().next()) else {
            return Ok(SummaryOutcome::Missing);
        };
        if page.missing.unwrap_or(false) {
            return Ok(SummaryOutcome::Missing);
        }
        if is_disambiguation(&page) {
            let options = self.link_titles(title).await?;
            return Ok(SummaryOutcome::Disambiguation(options));
        }

        let extract = page.extract.unwrap_or_default();
        if extract.is_empty() {
            return Ok(SummaryOutcome::Missing);
        }
        Ok(SummaryOutcome::Summary(PageSummary {
            title: page.title.unwrap_or_else(|| title.to_string()),
            extract,
            thumbnail: page.thumbnail.map(|thumb| thumb.source),
        }))
    }

    /// Lists the article links of a page, in document order. Used as the
    /// alternative-title list of a disambiguation page.
    async fn link_titles(&self, title: &str) -> Result<Vec<String>, LookupError> {
        let response = self
            .http
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("prop", "links"),
                ("titles", title),
                ("plnamespace", "0"),
                ("pllimit", "max"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?;

        let body: QueryEnvelope<PagesBody> = read_json(response).await?;
        Ok(body
            .query
            .and_then(|q| q.pages.into_iter().next())
            .map(|page| page.links.into_iter().map(|link| link.title).collect())
            .unwrap_or_default())
    }
}

fn is_disambiguation(page: &PageBody) -> bool {
    page.pageprops
        .as_ref()
        .map_or(false, |props| props.get("disambiguation").is_some())
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LookupError> {
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Provider(status.to_string()));
    }
    Ok(response.json().await?)
}
