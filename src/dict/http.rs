//! reqwest-backed [`Fetcher`].
//!
//! Plain unauthenticated GETs: no custom headers, no retries. Non-2xx
//! responses are logged but their body is still handed to the parser, the
//! same way a successful page would be.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::fetcher::{DictError, Fetcher};

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher. `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, DictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DictError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DictError> {
        info!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DictError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} for {}", status, url);
        }

        let body = response.text().await.map_err(|e| DictError::Network {
            url: url.to_string(),
            message: format!("failed to read response: {e}"),
        })?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
