//! Product catalog lookups
//!
//! Resolves a scanned code into a [`Product`] record via the UPCitemdb
//! API and downloads product photos. One fresh record per scan; nothing
//! is cached or persisted.

pub mod domain;
pub mod photo;
pub mod upcitemdb;

pub use domain::{CatalogError, Product, INVALID_UPC_NAME, UNKNOWN_PRODUCT_NAME};
pub use photo::{PhotoClient, ProductPhoto};
pub use upcitemdb::CatalogClient;
