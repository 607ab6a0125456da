//! Adapter layer: Convert UPCitemdb DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if UPCitemdb changes their response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::catalog::domain::Product;

/// Convert a lookup response into a [`Product`] for the scanned code.
///
/// The first item wins when several match; an empty item list becomes
/// the "Unknown Product" placeholder.
pub fn to_product(upc: &str, response: dto::LookupResponse) -> Product {
    let Some(item) = response.items.into_iter().next() else {
        return Product::unknown(upc);
    };

    Product {
        upc: upc.to_string(),
        name: non_blank(item.title).unwrap_or_else(|| {
            crate::catalog::domain::UNKNOWN_PRODUCT_NAME.to_string()
        }),
        price: non_zero(item.lowest_recorded_price),
        highest_price: non_zero(item.highest_recorded_price),
        brand: non_blank(item.brand),
        category: non_blank(item.category),
        description: non_blank(item.description),
        model: non_blank(item.model),
        color: non_blank(item.color),
        size: non_blank(item.size),
        weight: non_blank(item.weight),
        ean: non_blank(item.ean),
        asin: non_blank(item.asin),
        image_urls: item
            .images
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .collect(),
    }
}

/// The API reports absent strings as `""`; normalize those to `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// The API reports absent prices as `0.0`; normalize those to `None`.
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|p| *p != 0.0)
}
