//! Product photo HTTP client
//!
//! Downloads the product photo referenced by a record's first image
//! URL. Photo failures never abort a scan - the caller logs and
//! composes the label without the photo block.

use std::time::Duration;

use crate::catalog::domain::CatalogError;

/// Downloaded product photo
#[derive(Debug, Clone)]
pub struct ProductPhoto {
    /// Image data (usually JPEG or PNG)
    pub data: Vec<u8>,
    /// MIME type as reported by the server
    pub mime_type: String,
    /// Source URL
    pub url: String,
}

impl ProductPhoto {
    /// Whether the server labeled the payload as an image.
    ///
    /// Catalog image URLs sometimes resolve to an HTML error page with
    /// a 200 status; callers skip decoding those.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Photo download client
pub struct PhotoClient {
    http_client: reqwest::Client,
}

impl PhotoClient {
    /// Create a new client with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { http_client }
    }

    /// Download an image from a URL
    pub async fn download(&self, url: &str) -> Result<ProductPhoto, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        // Get content type
        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?
            .to_vec();

        Ok(ProductPhoto {
            data,
            mime_type,
            url: url.to_string(),
        })
    }
}
