use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to or reading the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    /// Connection, DNS or timeout failure, or an unreadable body.
    #[error("failed to fetch URL {url}: {message}")]
    Network { url: String, message: String },
    /// The HTTP client itself could not be set up.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// The markup could not be queried.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Source of raw dictionary pages.
///
/// Everything that touches the network goes through this trait so the
/// session and the extraction functions can be exercised without it.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GETs `url` and returns the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, DictError>;
}
