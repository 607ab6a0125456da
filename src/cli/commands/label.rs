//! Compose a single label outside the scan loop.

use std::path::Path;

use tokio::runtime::Runtime;

use crate::config;

use super::scan::ScanPipeline;

/// Compose a label for one code, optionally printing it.
pub fn cmd_label(
    rt: &Runtime,
    code: &str,
    output: Option<&Path>,
    print: bool,
) -> anyhow::Result<()> {
    let config = config::load();
    let pipeline = ScanPipeline::new(&config)?;

    let result = rt.block_on(async {
        match output {
            Some(path) => pipeline.process_to(code, path, print).await,
            None => pipeline.process(code, print).await,
        }
    });

    match result {
        Ok(outcome) => {
            println!("✓ {} -> {:?}", outcome.product.name, outcome.label_path);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
