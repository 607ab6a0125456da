//! UPCitemdb API Data Transfer Objects
//!
//! These types match EXACTLY what the UPCitemdb API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the upcitemdb module - convert to domain types.
//!
//! API Reference: https://www.upcitemdb.com/wp/docs/main/development/

use serde::{Deserialize, Serialize};

/// Lookup response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupResponse {
    /// "OK" on success
    pub code: Option<String>,
    /// Total number of matching items
    pub total: Option<u32>,
    /// Matching items; empty when the code is unknown to the catalog
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One catalog item
///
/// String fields come back as `""` rather than being omitted, and price
/// fields as `0.0`; the adapter normalizes both to absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Item {
    /// Product display name
    pub title: Option<String>,
    /// UPC-A identifier
    pub upc: Option<String>,
    /// EAN-13 identifier
    pub ean: Option<String>,
    /// Amazon identifier
    pub asin: Option<String>,
    /// Brand name
    pub brand: Option<String>,
    /// Manufacturer model number
    pub model: Option<String>,
    /// Color
    pub color: Option<String>,
    /// Size
    pub size: Option<String>,
    /// Weight (free-form string, e.g. "1.2 lbs")
    pub weight: Option<String>,
    /// Category path
    pub category: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Lowest recorded price
    pub lowest_recorded_price: Option<f64>,
    /// Highest recorded price
    pub highest_recorded_price: Option<f64>,
    /// Product photo URLs
    #[serde(default)]
    pub images: Vec<String>,
}

/// Error response body (sent with 4xx statuses)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "INVALID_UPC")
    pub code: Option<String>,
    /// Human-readable message
    pub message: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a minimal empty-result response
    #[test]
    fn test_parse_empty_lookup() {
        let json = r#"{
            "code": "OK",
            "total": 0,
            "items": []
        }"#;

        let response: LookupResponse =
            serde_json::from_str(json).expect("Should parse empty lookup");

        assert_eq!(response.code.as_deref(), Some("OK"));
        assert_eq!(response.total, Some(0));
        assert!(response.items.is_empty());
    }

    /// Test parsing a response with one full item
    #[test]
    fn test_parse_full_item() {
        let json = r#"{
            "code": "OK",
            "total": 1,
            "items": [{
                "title": "Coca-Cola Classic 12oz",
                "upc": "049000006346",
                "ean": "0049000006346",
                "asin": "B000RYZQZC",
                "brand": "Coca-Cola",
                "model": "12OZ",
                "color": "Red",
                "size": "12 fl oz",
                "weight": "0.9 lbs",
                "category": "Food, Beverages & Tobacco > Beverages > Soda",
                "description": "Classic cola soft drink",
                "lowest_recorded_price": 0.89,
                "highest_recorded_price": 2.49,
                "images": [
                    "https://example.com/front.jpg",
                    "https://example.com/back.jpg"
                ]
            }]
        }"#;

        let response: LookupResponse =
            serde_json::from_str(json).expect("Should parse full item");

        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.title.as_deref(), Some("Coca-Cola Classic 12oz"));
        assert_eq!(item.brand.as_deref(), Some("Coca-Cola"));
        assert_eq!(item.lowest_recorded_price, Some(0.89));
        assert_eq!(item.highest_recorded_price, Some(2.49));
        assert_eq!(item.images.len(), 2);
    }

    /// Test parsing an item with the API's empty-string placeholders
    #[test]
    fn test_parse_sparse_item() {
        let json = r#"{
            "code": "OK",
            "total": 1,
            "items": [{
                "title": "Mystery Widget",
                "upc": "012345678905",
                "brand": "",
                "model": "",
                "lowest_recorded_price": 0
            }]
        }"#;

        let response: LookupResponse =
            serde_json::from_str(json).expect("Should parse sparse item");

        let item = &response.items[0];
        assert_eq!(item.title.as_deref(), Some("Mystery Widget"));
        // Empty strings survive parsing; the adapter drops them
        assert_eq!(item.brand.as_deref(), Some(""));
        assert_eq!(item.lowest_recorded_price, Some(0.0));
        assert!(item.ean.is_none());
        assert!(item.images.is_empty());
    }

    /// Test parsing error response
    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "code": "INVALID_UPC",
            "message": "The UPC provided is invalid."
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.code.as_deref(), Some("INVALID_UPC"));
        assert!(error.message.unwrap().contains("invalid"));
    }
}
