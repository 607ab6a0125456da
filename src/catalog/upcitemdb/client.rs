//! UPCitemdb HTTP client
//!
//! Handles communication with the UPCitemdb lookup endpoint.
//! See: https://www.upcitemdb.com/wp/docs/main/development/
//!
//! The trial endpoint needs no API key but rate limits aggressively;
//! a 429 surfaces as [`CatalogError::RateLimited`].

use std::time::Duration;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, Product};

/// User agent string sent with every lookup
const USER_AGENT: &str = concat!("UpcLabeler/", env!("CARGO_PKG_VERSION"));

/// UPCitemdb API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client against the given endpoint.
    ///
    /// The timeout guards every request so a stalled connection cannot
    /// hang the scan loop.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up a scanned code and return a [`Product`] record.
    ///
    /// A code the service rejects as malformed resolves to
    /// `Product::invalid` rather than an error; only transport-level
    /// failures and rate limiting are surfaced as `Err`.
    pub async fn lookup(&self, upc: &str) -> Result<Product, CatalogError> {
        let url = format!("{}?upc={}", self.base_url, urlencoding::encode(upc));

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST {
            tracing::info!("Catalog rejected code as invalid: {}", upc);
            return Ok(Product::invalid(upc));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                if let Some(message) = error.message {
                    return Err(CatalogError::ApiError(message));
                }
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::LookupResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(adapter::to_product(upc, body))
    }
}
