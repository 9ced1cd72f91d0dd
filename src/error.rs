//! Error types for ballot-scrape.
//!
//! Extraction misses and unavailable upstream pages are not errors: they
//! degrade to empty results inside the scrapers. The variants here cover what
//! is left, which is request validation, startup configuration and failures
//! while running a request.

/// Error type for scraping and serving operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required query parameter was absent or empty.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The HTTP client could not be built or a transfer failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A request handler task failed before producing a response.
    #[error("{0}")]
    Task(String),
}

impl Error {
    /// Whether the caller can fix this error by changing the request.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::MissingParameter(_))
    }
}

/// Result type alias for ballot-scrape operations.
pub type Result<T> = std::result::Result<T, Error>;
