//! Document Fetcher
//!
//! One GET per call, no retries, client-default timeouts and redirect policy.
//! Anything other than a 200 response, including transport failures, is
//! reported as [`Fetched::NotFound`] and callers degrade to empty results.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::encoding;
use crate::error::Result;

/// Outcome of a single page retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// Status was exactly 200; the body decoded to UTF-8.
    Document(String),

    /// Any other status, or no response at all (`status: None`).
    NotFound { status: Option<u16> },
}

impl Fetched {
    /// The document body, if the fetch succeeded.
    #[must_use]
    pub fn into_document(self) -> Option<String> {
        match self {
            Self::Document(body) => Some(body),
            Self::NotFound { .. } => None,
        }
    }
}

/// Retrieves documents by URL.
///
/// Implemented by [`HttpFetcher`] for live pages; tests supply canned pages.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Fetched> + Send;
}

/// `User-Agent` sent when none is configured. Wikimedia rejects requests
/// without one.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "ballot-scrape/",
    env!("CARGO_PKG_VERSION"),
    " (election data lookup; +https://github.com/ballot-scrape)"
);

/// `reqwest`-backed fetcher. Sends a `User-Agent` and nothing else beyond
/// the client defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher. `None` sends [`DEFAULT_USER_AGENT`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the TLS backend cannot be initialised.
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Fetched {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url, error = %err, "request failed");
                return Fetched::NotFound { status: None };
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Fetched::NotFound {
                status: Some(status.as_u16()),
            };
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match response.bytes().await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched document");
                Fetched::Document(encoding::decode_body(&body, content_type.as_deref()))
            }
            Err(err) => {
                warn!(url, error = %err, "failed to read response body");
                Fetched::NotFound { status: None }
            }
        }
    }
}
