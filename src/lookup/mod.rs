//! Remote lookup clients and the result protocol they share.
//!
//! Each client wraps one external search provider behind a uniform
//! `search(query) -> LookupOutcome` contract. Every transport- or
//! provider-level failure is classified here, at the client boundary; no
//! raw HTTP fault ever reaches the command dispatcher.
pub mod encyclopedia;
pub mod image;
pub mod resolve;
pub mod select;
pub mod video;

pub use encyclopedia::EncyclopediaClient;
pub use image::ImageSearchClient;
pub use video::VideoSearchClient;

use thiserror::Error;

/// One ranked search result returned by a provider.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub title: String,
    pub link: String,
    pub context_link: Option<String>,
    pub thumbnail: Option<String>,
}

/// The outcome of a successful provider round trip.
///
/// `Found` always carries at least one candidate, in provider ranking
/// order; a provider response without usable items maps to `Empty`.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(Vec<Candidate>),
    Empty,
}

/// Classification of a failed provider round trip.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider reported that the request allotment is depleted.
    /// Distinct from other provider errors because the corrective action
    /// differs (wait instead of reporting a bug).
    #[error("the provider request quota is exhausted")]
    QuotaExhausted,
    /// Any other error reported by the provider API.
    #[error("the provider reported an error: {0}")]
    Provider(String),
    /// Timeout or connection failure before a provider answer arrived.
    #[error("could not reach the provider: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            LookupError::Transport(err.to_string())
        } else {
            LookupError::Provider(err.to_string())
        }
    }
}
