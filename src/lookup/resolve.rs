//! Disambiguation-retry algorithm for encyclopedia lookups.
use thiserror::Error;

use super::encyclopedia::{EncyclopediaClient, PageSummary, SummaryOutcome};
use super::LookupError;

/// Hard bound on the retry loop, independent of option-list length.
const MAX_DISAMBIGUATION_RETRIES: usize = 8;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Every candidate title was exhausted without reaching a summary.
    #[error("no page could be resolved")]
    NothingFound,
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Resolves `first_title` into a concrete page summary.
///
/// When a title turns out to be a disambiguation page the provider hands
/// back an ordered list of alternative titles. The next attempt takes
/// `options[cursor]` and the cursor advances by one per disambiguation
/// event; it is monotonic across events rather than resetting per list.
/// The loop ends on the first summary, or with `NothingFound` once the
/// cursor runs past the current list, a title resolves to a missing page,
/// or the retry cap is hit.
pub async fn resolve_summary(
    client: &EncyclopediaClient,
    first_title: &str,
) -> Result<PageSummary, ResolveError> {
    let mut title = first_title.to_string();
    let mut cursor = 0usize;

    for _ in 0..=MAX_DISAMBIGUATION_RETRIES {
        match client.summary(&title).await? {
            SummaryOutcome::Summary(page) => return Ok(page),
            SummaryOutcome::Missing => return Err(ResolveError::NothingFound),
            SummaryOutcome::Disambiguation(options) => {
                let Some(next) = options.get(cursor) else {
                    return Err(ResolveError::NothingFound);
                };
                title = next.clone();
                cursor += 1;
            }
        }
    }

    Err(ResolveError::NothingFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> EncyclopediaClient {
        EncyclopediaClient::new(crate::config::build_http_client().unwrap(), &server.uri())
    }

    fn summary_page(title: &str, extract: &str) -> serde_json::Value {
        json!({"query": {"pages": [{"title": title, "extract": extract}]}})
    }

    fn disambiguation_page(title: &str) -> serde_json::Value {
        json!({"query": {"pages": [{
            "title": title,
            "extract": "may refer to:",
            "pageprops": {"disambiguation": ""}
        }]}})
    }

    fn links_page(title: &str, options: &[&str]) -> serde_json::Value {
        let links: Vec<_> = options.iter().map(|t| json!({"ns": 0, "title": t})).collect();
        json!({"query": {"pages": [{"title": title, "links": links}]}})
    }

    #[tokio::test]
    async fn direct_hit_resolves_without_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "extracts|pageprops|pageimages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(summary_page("Ada Lovelace", "An English mathematician.")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = resolve_summary(&client(&server), "Ada Lovelace").await.unwrap();
        assert_eq!(page.title, "Ada Lovelace");
        assert_eq!(page.extract, "An English mathematician.");
    }

    #[tokio::test]
    async fn one_disambiguation_step_takes_the_first_alternative() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "extracts|pageprops|pageimages"))
            .and(query_param("titles", "Mercury"))
            .respond_with(ResponseTemplate::new(200).set_body_json(disambiguation_page("Mercury")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "links"))
            .and(query_param("titles", "Mercury"))
            .respond_with(ResponseTemplate::new(200).set_body_json(links_page(
                "Mercury",
                &["Mercury (planet)", "Mercury (element)", "Mercury (mythology)"],
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "extracts|pageprops|pageimages"))
            .and(query_param("titles", "Mercury (planet)"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(summary_page("Mercury (planet)", "The smallest planet.")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = resolve_summary(&client(&server), "Mercury").await.unwrap();
        assert_eq!(page.title, "Mercury (planet)");
    }

    #[tokio::test]
    async fn exhausted_alternatives_end_with_nothing_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "extracts|pageprops|pageimages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(disambiguation_page("Limbo")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("prop", "links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(links_page("Limbo", &[])))
            .mount(&server)
            .await;

        let err = resolve_summary(&client(&server), "Limbo").await.unwrap_err();
        assert!(matches!(err, ResolveError::NothingFound));
    }

    #[tokio::test]
    async fn missing_page_aborts_the_retry_loop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": {"pages": [{"title": "Gone", "missing": true}]}
            })))
            .mount(&server)
            .await;

        let err = resolve_summary(&client(&server), "Gone").await.unwrap_err();
        assert!(matches!(err, ResolveError::NothingFound));
    }
}
