//! The interactive scan loop and the per-scan pipeline.
//!
//! One scan runs lookup, barcode generation, label composition and
//! print submission to completion before the next stdin line is read,
//! so the fixed barcode/label output files are never written
//! concurrently. A failing step is reported and the loop returns to
//! the prompt - one bad code must not end the session.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbaImage;
use tokio::runtime::Runtime;

use crate::barcode;
use crate::catalog::{CatalogClient, PhotoClient, Product};
use crate::config::{self, Config, LabelConfig};
use crate::error::Result;
use crate::label::Composer;
use crate::printing::PrintDispatcher;

/// Run the interactive scan loop until stdin is exhausted.
pub fn cmd_scan(rt: &Runtime, printer: Option<&str>, no_print: bool) -> anyhow::Result<()> {
    let mut config = config::load();
    if let Some(queue) = printer {
        config.printer.queue = queue.to_string();
    }

    let pipeline = ScanPipeline::new(&config)?;

    println!("Please scan a UPC code:");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }

        match rt.block_on(pipeline.process(code, !no_print)) {
            Ok(outcome) => {
                println!("✓ {} -> {:?}", outcome.product.name, outcome.label_path);
            }
            Err(e) => {
                tracing::error!("Scan failed for {}: {}", code, e);
                eprintln!("✗ {}", e);
            }
        }
        println!("Please scan the next UPC code:");
    }

    Ok(())
}

/// What one successful scan produced
pub(crate) struct ScanOutcome {
    pub(crate) product: Product,
    pub(crate) label_path: PathBuf,
}

/// Everything one scan needs, built once per session.
pub(crate) struct ScanPipeline {
    catalog: CatalogClient,
    photos: PhotoClient,
    composer: Composer,
    dispatcher: PrintDispatcher,
    label_config: LabelConfig,
}

impl ScanPipeline {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.lookup.timeout_secs);
        Ok(Self {
            catalog: CatalogClient::new(config.lookup.endpoint.clone(), timeout),
            photos: PhotoClient::new(timeout),
            composer: Composer::new(config.label.clone())?,
            dispatcher: PrintDispatcher::new(
                config.printer.queue.clone(),
                config.printer.job_title.clone(),
            ),
            label_config: config.label.clone(),
        })
    }

    /// Process one scanned code end to end, writing the label to the
    /// configured path.
    pub(crate) async fn process(&self, code: &str, print: bool) -> Result<ScanOutcome> {
        let label_path = self.label_config.label_path();
        self.process_to(code, &label_path, print).await
    }

    /// Process one scanned code, writing the label to `label_path`.
    pub(crate) async fn process_to(
        &self,
        code: &str,
        label_path: &Path,
        print: bool,
    ) -> Result<ScanOutcome> {
        println!("Fetching product information...");
        let product = self.catalog.lookup(code).await?;

        std::fs::create_dir_all(&self.label_config.work_dir)?;
        let raster = barcode::render(code)?;
        barcode::save(&raster, &self.label_config.barcode_base_path())?;

        let photo = self.fetch_photo(&product).await;

        let band_raster = if product.is_placeholder() {
            None
        } else {
            Some(raster)
        };
        let content = self.composer.content(&product, band_raster, photo);
        let label_path = self.composer.compose_to_file(&content, label_path)?;

        if print {
            println!("Printing label for {}...", product.name);
            self.dispatcher.submit(&label_path)?;
        }

        Ok(ScanOutcome {
            product,
            label_path,
        })
    }

    /// Fetch and decode the product photo, if the record has one.
    ///
    /// Photo failures never abort composition - log and continue
    /// without the photo block.
    async fn fetch_photo(&self, product: &Product) -> Option<RgbaImage> {
        let url = product.image_urls.first()?;

        let photo = match self.photos.download(url).await {
            Ok(photo) => photo,
            Err(e) => {
                tracing::warn!("Could not download product photo from {}: {}", url, e);
                return None;
            }
        };

        if !photo.is_image() {
            tracing::warn!(
                "Skipping product photo from {}: server sent {}",
                photo.url,
                photo.mime_type
            );
            return None;
        }

        match image::load_from_memory(&photo.data) {
            Ok(decoded) => Some(decoded.to_rgba8()),
            Err(e) => {
                tracing::warn!("Could not decode product photo from {}: {}", photo.url, e);
                None
            }
        }
    }
}
