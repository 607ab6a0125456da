//! UPCitemdb catalog integration
//!
//! Layered like every external API in this codebase:
//! - `dto`: exact wire types
//! - `adapter`: DTO to domain conversion
//! - `client`: HTTP plumbing

mod adapter;
mod client;
mod dto;

pub use client::CatalogClient;
