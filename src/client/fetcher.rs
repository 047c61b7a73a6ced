//! HTTP transport for config documents.
//!
//! # Responsibilities
//! - Build the profile URL from settings
//! - Issue one GET per profile and return the raw body
//!
//! # Design Decisions
//! - Status codes are not treated as errors; the body goes to the decoder
//! - No retries and no timeout beyond the transport defaults

use crate::client::types::FetchError;
use crate::config::Settings;

/// Config server client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone, Default)]
pub struct ConfigClient {
    http: reqwest::Client,
}

impl ConfigClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured `reqwest` client (proxy or pool settings).
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch the raw config document for `profile`.
    pub async fn fetch_profile(
        &self,
        settings: &Settings,
        profile: &str,
    ) -> Result<Vec<u8>, FetchError> {
        self.fetch(&settings.url_for(profile)).await
    }

    /// GET `url` and return the full response body.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::info!(url = %url, "Fetching config");

        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Config server returned non-success status");
        }

        let body = response.bytes().await.map_err(network)?;
        tracing::debug!(url = %url, bytes = body.len(), "Config response received");

        Ok(body.to_vec())
    }
}
