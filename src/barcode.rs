//! Barcode image generation
//!
//! Encodes a scanned code as a Code 128 symbol and rasterizes it to a
//! PNG the label composer can paste into its barcode band. Rendering
//! walks the encoded bars left to right, advancing by bar width plus
//! the following space, with the standard 10-module quiet zone on each
//! side.

use std::path::{Path, PathBuf};

use code128::Code128;
use image::{GrayImage, Luma};

/// Pixels per barcode module
const MODULE_PX: u32 = 2;

/// Height of the rendered bars in pixels
const BAR_HEIGHT: u32 = 120;

/// Leading quiet zone in modules
const QUIET_ZONE: u32 = 10;

/// Errors that can occur while generating a barcode
#[derive(Debug, thiserror::Error)]
pub enum BarcodeError {
    #[error("Cannot encode an empty code")]
    EmptyCode,

    #[error("Code contains characters outside the Code 128 character set: {0}")]
    UnsupportedCharacters(String),

    #[error("Failed to write barcode image: {0}")]
    Write(#[from] image::ImageError),
}

/// Encode `code` and write the raster to `base_path` + `.png`.
///
/// The generator appends its own extension, so callers pass a base name
/// (e.g. `work/barcode`) and use the returned path afterwards.
pub fn render_to_file(code: &str, base_path: &Path) -> Result<PathBuf, BarcodeError> {
    let image = render(code)?;
    save(&image, base_path)
}

/// Write an already-rendered barcode to `base_path` + `.png`.
pub fn save(image: &GrayImage, base_path: &Path) -> Result<PathBuf, BarcodeError> {
    let path = base_path.with_extension("png");
    image.save(&path)?;
    tracing::debug!("Wrote barcode raster to {:?}", path);
    Ok(path)
}

/// Encode `code` as Code 128 and rasterize it.
pub fn render(code: &str) -> Result<GrayImage, BarcodeError> {
    if code.is_empty() {
        return Err(BarcodeError::EmptyCode);
    }
    // Code 128 covers ASCII only; the encoder would escape anything
    // else, which a scanner at the register cannot read back.
    if !code.is_ascii() {
        return Err(BarcodeError::UnsupportedCharacters(code.to_string()));
    }

    let symbol = Code128::encode(code.as_bytes());

    let width = symbol.len() as u32 * MODULE_PX;
    let mut image = GrayImage::from_pixel(width, BAR_HEIGHT, Luma([255]));

    let mut x = QUIET_ZONE;
    for bar in symbol.modules() {
        let bar_width = bar.width as u32;
        for module in x..x + bar_width {
            for px in module * MODULE_PX..(module + 1) * MODULE_PX {
                if px >= width {
                    break;
                }
                for py in 0..BAR_HEIGHT {
                    image.put_pixel(px, py, Luma([0]));
                }
            }
        }
        x += bar_width + bar.space as u32;
    }

    Ok(image)
}
