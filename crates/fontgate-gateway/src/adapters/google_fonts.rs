//! Google Fonts catalog adapter.
//!
//! Outbound HTTP implementation of the [`FontCatalogSource`] port.

use crate::domain::config::UpstreamConfig;
use crate::domain::error::UpstreamError;
use crate::domain::query::SortOrder;
use crate::domain::types::UpstreamCatalog;
use crate::ports::outbound::FontCatalogSource;
use async_trait::async_trait;
use tracing::debug;

/// HTTP client for the Google Fonts web API
pub struct GoogleFontsClient {
    config: UpstreamConfig,
    client: reqwest::Client,
}

impl GoogleFontsClient {
    /// Create a client over the given upstream configuration.
    ///
    /// The inner `reqwest::Client` is built once and reused so its
    /// connection pool is shared across requests.
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FontCatalogSource for GoogleFontsClient {
    async fn list_fonts(&self, sort: SortOrder) -> Result<UpstreamCatalog, UpstreamError> {
        // Credential check happens before any network I/O
        if !self.config.is_configured() {
            return Err(UpstreamError::Credentials);
        }

        debug!(sort = %sort, "fetching font catalog");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("sort", sort.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json::<UpstreamCatalog>().await?)
    }
}
