//! Process-wide configuration: provider endpoints, image-search
//! credentials and the shared HTTP client.
//!
//! Everything here is read once at startup and treated as read-only for
//! the rest of the process lifetime.
use std::time::Duration;

/// Environment variable holding the image-search API key.
pub const IMAGE_API_KEY_ENV: &str = "SEARCH_BOT_IMAGE_API_KEY";
/// Environment variable holding the image-search engine id (CX).
pub const IMAGE_CX_ENV: &str = "SEARCH_BOT_IMAGE_CX";

const VIDEO_API_ENV: &str = "SEARCH_BOT_VIDEO_API_URL";
const IMAGE_API_ENV: &str = "SEARCH_BOT_IMAGE_API_URL";
const ENCYCLOPEDIA_API_ENV: &str = "SEARCH_BOT_ENCYCLOPEDIA_API_URL";

const DEFAULT_VIDEO_API: &str = "https://vid.puffyan.us";
const DEFAULT_IMAGE_API: &str = "https://www.googleapis.com";

/// Timeout for a single remote call. Background tasks are bounded by the
/// same value in `tasks::BACKGROUND_TASK_TIMEOUT`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials for the image-search provider.
///
/// Both values must be present in the environment; otherwise the image
/// command is disabled while the other commands keep working.
#[derive(Debug, Clone)]
pub struct ImageSearchConfig {
    pub api_key: String,
    pub cx: String,
}

impl ImageSearchConfig {
    /// Reads the credentials from the process environment.
    ///
    /// Returns `None` when either variable is missing or blank.
    pub fn from_env() -> Option<Self> {
        let api_key = non_empty_env(IMAGE_API_KEY_ENV)?;
        let cx = non_empty_env(IMAGE_CX_ENV)?;
        Some(Self { api_key, cx })
    }
}

/// Base URLs of the three lookup providers.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub video_api: String,
    pub image_api: String,
    pub encyclopedia_api: String,
}

impl Endpoints {
    /// Builds the endpoint set from the environment, falling back to the
    /// public provider instances. The encyclopedia base is derived from
    /// the configured language edition.
    pub fn from_env(lang: &str) -> Self {
        Self {
            video_api: non_empty_env(VIDEO_API_ENV)
                .unwrap_or_else(|| DEFAULT_VIDEO_API.to_string()),
            image_api: non_empty_env(IMAGE_API_ENV)
                .unwrap_or_else(|| DEFAULT_IMAGE_API.to_string()),
            encyclopedia_api: non_empty_env(ENCYCLOPEDIA_API_ENV)
                .unwrap_or_else(|| format!("https://{}.wikipedia.org", lang)),
        }
    }
}

/// Builds the HTTP client shared by all lookup clients.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("search-bot/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_derive_encyclopedia_base_from_language() {
        let endpoints = Endpoints::from_env("de");
        assert_eq!(endpoints.encyclopedia_api, "https://de.wikipedia.org");
    }

    #[test]
    fn image_config_requires_both_credentials() {
        std::env::remove_var(IMAGE_API_KEY_ENV);
        std::env::set_var(IMAGE_CX_ENV, "some-cx");
        assert!(ImageSearchConfig::from_env().is_none());

        std::env::set_var(IMAGE_API_KEY_ENV, "some-key");
        let config = ImageSearchConfig::from_env().expect("both variables set");
        assert_eq!(config.api_key, "some-key");
        assert_eq!(config.cx, "some-cx");

        std::env::remove_var(IMAGE_API_KEY_ENV);
        std::env::remove_var(IMAGE_CX_ENV);
    }
}
