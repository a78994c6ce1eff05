use async_trait::async_trait;
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::PoiResponse;
use nearby_core::ports::{PoiQuery, PoiSource};
use std::time::Duration;

use crate::query::build_query;

/// Overpass API client
pub struct OverpassClient {
    /// Interpreter URL (e.g., "https://overpass-api.de/api/interpreter")
    endpoint: String,

    /// Per-request timeout
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl OverpassClient {
    /// Create a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NearbyError::Source(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { endpoint: endpoint.into(), timeout, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full GET URL with the query in the `data` parameter
    pub fn request_url(&self, query: &PoiQuery) -> Result<reqwest::Url> {
        reqwest::Url::parse_with_params(&self.endpoint, &[("data", build_query(query))])
            .map_err(|e| NearbyError::Source(format!("Invalid endpoint '{}': {}", self.endpoint, e)))
    }
}

#[async_trait]
impl PoiSource for OverpassClient {
    async fn fetch(&self, query: &PoiQuery) -> Result<PoiResponse> {
        let url = self.request_url(query)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                format!("request timed out after {}s", self.timeout.as_secs())
            } else {
                format!("failed to reach {}: {}", self.endpoint, e)
            };
            NearbyError::Source(reason)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NearbyError::Source(format!(
                "Overpass API error ({}): {}",
                status,
                body.trim()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NearbyError::Source(format!("Failed to read response: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| NearbyError::Source(format!("Failed to parse Overpass response: {}", e)))
    }

    fn name(&self) -> &str {
        "overpass"
    }
}
