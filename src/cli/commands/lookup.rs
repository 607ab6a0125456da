//! One-shot catalog lookup command.

use std::time::Duration;

use tokio::runtime::Runtime;

use crate::catalog::CatalogClient;
use crate::config;

/// Look up a single code and print the resolved record.
pub fn cmd_lookup(rt: &Runtime, code: &str) -> anyhow::Result<()> {
    let config = config::load();
    let client = CatalogClient::new(
        config.lookup.endpoint.clone(),
        Duration::from_secs(config.lookup.timeout_secs),
    );

    rt.block_on(async {
        match client.lookup(code).await {
            Ok(product) => {
                println!("UPC:    {}", product.upc);
                println!("Name:   {}", product.name);
                if let Some(price) = product.price {
                    println!("Price:  ${price:.2}");
                }
                if let Some(highest) = product.highest_price {
                    println!("Highest recorded: ${highest:.2}");
                }
                if let Some(brand) = &product.brand {
                    println!("Brand:  {brand}");
                }
                if let Some(model) = &product.model {
                    println!("Model:  {model}");
                }
                if let Some(color) = &product.color {
                    println!("Color:  {color}");
                }
                if let Some(size) = &product.size {
                    println!("Size:   {size}");
                }
                if let Some(weight) = &product.weight {
                    println!("Weight: {weight}");
                }
                if let Some(category) = &product.category {
                    println!("Category: {category}");
                }
                if let Some(ean) = &product.ean {
                    println!("EAN:    {ean}");
                }
                if let Some(asin) = &product.asin {
                    println!("ASIN:   {asin}");
                }
                if let Some(description) = &product.description {
                    println!();
                    println!("{description}");
                }
                if !product.image_urls.is_empty() {
                    println!();
                    println!("Photos:");
                    for url in &product.image_urls {
                        println!("  {url}");
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });
    Ok(())
}
