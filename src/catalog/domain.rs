//! Internal domain model for product lookups.
//!
//! These types are OUR types - they don't change when the catalog API
//! changes. All external API responses get converted into these types
//! via the adapter.

/// Display name used when the catalog rejects a code as malformed.
pub const INVALID_UPC_NAME: &str = "Invalid UPC";

/// Display name used when a well-formed code has no catalog entry.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// A product record resolved for one scanned code.
///
/// Every field the catalog may omit is a real `Option`; presence checks
/// happen once, at the label-composition boundary. The record is built
/// fresh per scan and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// The scanned code, passed through unvalidated
    pub upc: String,
    /// Display name; carries [`INVALID_UPC_NAME`] or
    /// [`UNKNOWN_PRODUCT_NAME`] for placeholder records
    pub name: String,
    /// Lowest recorded price
    pub price: Option<f64>,
    /// Highest recorded price
    pub highest_price: Option<f64>,
    /// Brand name
    pub brand: Option<String>,
    /// Category path (e.g. "Food, Beverages & Tobacco > Snacks")
    pub category: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Manufacturer model number
    pub model: Option<String>,
    /// Color
    pub color: Option<String>,
    /// Size
    pub size: Option<String>,
    /// Weight, as reported (free-form, e.g. "1.2 lbs")
    pub weight: Option<String>,
    /// EAN-13 identifier
    pub ean: Option<String>,
    /// Amazon identifier
    pub asin: Option<String>,
    /// Product photo URLs; the composer fetches the first one
    pub image_urls: Vec<String>,
}

impl Product {
    /// Placeholder record for a code the catalog rejected as malformed.
    pub fn invalid(upc: impl Into<String>) -> Self {
        Self {
            upc: upc.into(),
            name: INVALID_UPC_NAME.to_string(),
            ..Default::default()
        }
    }

    /// Placeholder record for a code absent from the catalog.
    pub fn unknown(upc: impl Into<String>) -> Self {
        Self {
            upc: upc.into(),
            name: UNKNOWN_PRODUCT_NAME.to_string(),
            ..Default::default()
        }
    }

    /// Whether this record is the "nothing found" placeholder.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_PRODUCT_NAME
    }

    /// Whether this record carries no real catalog data.
    ///
    /// Placeholder records get a ":(" glyph on the label instead of a
    /// barcode band.
    pub fn is_placeholder(&self) -> bool {
        self.name == UNKNOWN_PRODUCT_NAME || self.name == INVALID_UPC_NAME
    }
}

/// Errors that can occur during catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_has_no_data() {
        let product = Product::invalid("000000000000");

        assert_eq!(product.upc, "000000000000");
        assert_eq!(product.name, INVALID_UPC_NAME);
        assert!(product.price.is_none());
        assert!(product.highest_price.is_none());
        assert!(product.brand.is_none());
        assert!(product.category.is_none());
        assert!(product.description.is_none());
        assert!(product.model.is_none());
        assert!(product.color.is_none());
        assert!(product.size.is_none());
        assert!(product.weight.is_none());
        assert!(product.ean.is_none());
        assert!(product.asin.is_none());
        assert!(product.image_urls.is_empty());
    }

    #[test]
    fn test_unknown_record() {
        let product = Product::unknown("012345678905");

        assert_eq!(product.name, UNKNOWN_PRODUCT_NAME);
        assert!(product.is_unknown());
        assert!(product.price.is_none());
        assert!(product.image_urls.is_empty());
    }

    #[test]
    fn test_named_record_is_not_a_placeholder() {
        let product = Product {
            upc: "012345678905".to_string(),
            name: "Widget".to_string(),
            ..Default::default()
        };

        assert!(!product.is_unknown());
        assert!(!product.is_placeholder());
    }

    #[test]
    fn test_invalid_record_is_a_placeholder_but_not_unknown() {
        let product = Product::invalid("x");

        assert!(!product.is_unknown());
        assert!(product.is_placeholder());
    }
}
