//! Label composition
//!
//! Builds the printable label image for one product record. Layout is
//! two-pass: [`Composer::measure`] walks the content to compute the
//! canvas size, then [`Composer::render`] draws onto a canvas of
//! exactly that size, so sizing stays independent of drawing.
//!
//! Top to bottom: wrapped product name (centered, large font), the
//! present attribute lines (left-justified), an optional product photo
//! (scaled to the content width, centered), and a fixed-height band
//! holding either the barcode or a ":(" placeholder when the catalog
//! had nothing.

pub mod font;
pub mod text;

use std::path::{Path, PathBuf};

use image::{imageops, GrayImage, Rgba, RgbaImage};
use rusttype::Font;

use crate::catalog::Product;
use crate::config::LabelConfig;

/// Font size for the product name
const NAME_PX: f32 = 28.0;

/// Font size for attribute lines
const ATTR_PX: f32 = 20.0;

/// Font size for the "nothing found" placeholder glyph
const PLACEHOLDER_PX: f32 = 64.0;

/// Vertical gap between content blocks
const BLOCK_GAP: u32 = 8;

/// Glyph drawn in place of the barcode when the catalog had no data
const PLACEHOLDER_GLYPH: &str = ":(";

/// Errors that can occur while composing a label
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("No usable label font found; set font_path under [label] in the config")]
    FontUnavailable,

    #[error("Failed to write label image: {0}")]
    Image(#[from] image::ImageError),
}

/// What fills the reserved bottom band
#[derive(Debug, Clone)]
pub enum Band {
    /// Barcode raster, scaled to the full label width at render time
    Barcode(GrayImage),
    /// ":(" glyph - the catalog had nothing for this code
    Placeholder,
}

/// Laid-out label content, ready to measure and render
#[derive(Debug, Clone)]
pub struct LabelContent {
    /// Product name, already wrapped to the content width
    pub name_lines: Vec<String>,
    /// Attribute lines, already wrapped; absent fields never appear
    pub attribute_lines: Vec<String>,
    /// Product photo, already scaled to fit the content width
    pub photo: Option<RgbaImage>,
    /// Barcode or placeholder band
    pub band: Band,
}

/// Measured canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSize {
    pub width: u32,
    pub height: u32,
}

/// Label composer
///
/// Owns the font and the layout settings; one instance serves every
/// scan in a session.
pub struct Composer {
    config: LabelConfig,
    font: Font<'static>,
}

impl Composer {
    /// Create a composer, loading the label font.
    pub fn new(config: LabelConfig) -> Result<Self, LabelError> {
        let font = font::load_label_font(config.font_path.as_deref())?;
        Ok(Self { config, font })
    }

    /// Width available to text and photo (label width minus padding).
    fn content_width(&self) -> u32 {
        self.config.width.saturating_sub(self.config.padding * 2)
    }

    /// Assemble the content for one product record.
    ///
    /// This is the composition boundary: presence checks happen here
    /// and nowhere else. Placeholder records get the ":(" band even
    /// when a barcode raster was generated.
    pub fn content(
        &self,
        product: &Product,
        barcode: Option<GrayImage>,
        photo: Option<RgbaImage>,
    ) -> LabelContent {
        let budget = self.content_width() as f32;
        let name_measure = |s: &str| text::text_width(&self.font, NAME_PX, s);
        let attr_measure = |s: &str| text::text_width(&self.font, ATTR_PX, s);

        let name_lines = text::wrap_words(name_measure, budget, &product.name);

        let mut attribute_lines = Vec::new();
        for line in attribute_text(product) {
            attribute_lines.extend(text::wrap_words(attr_measure, budget, &line));
        }

        let photo = photo.map(|p| self.scale_photo(p));

        let band = if product.is_placeholder() {
            Band::Placeholder
        } else {
            match barcode {
                Some(raster) => Band::Barcode(raster),
                None => Band::Placeholder,
            }
        };

        LabelContent {
            name_lines,
            attribute_lines,
            photo,
            band,
        }
    }

    /// Downscale a photo to the content width, preserving aspect ratio.
    fn scale_photo(&self, photo: RgbaImage) -> RgbaImage {
        let max_width = self.content_width();
        if photo.width() <= max_width || photo.width() == 0 {
            return photo;
        }
        let scale = max_width as f32 / photo.width() as f32;
        let height = ((photo.height() as f32 * scale).round() as u32).max(1);
        imageops::resize(&photo, max_width, height, imageops::FilterType::Triangle)
    }

    /// Compute the canvas size for `content` without drawing anything.
    pub fn measure(&self, content: &LabelContent) -> LabelSize {
        LabelSize {
            width: self.config.width,
            height: self.band_top(content) + self.config.band_height + self.config.padding,
        }
    }

    /// Y coordinate where the barcode/placeholder band starts.
    fn band_top(&self, content: &LabelContent) -> u32 {
        let name_line_h = text::line_height(&self.font, NAME_PX).ceil() as u32;
        let attr_line_h = text::line_height(&self.font, ATTR_PX).ceil() as u32;

        let mut y = self.config.padding;
        y += content.name_lines.len() as u32 * name_line_h;
        y += BLOCK_GAP;
        y += content.attribute_lines.len() as u32 * attr_line_h;
        if let Some(photo) = &content.photo {
            y += BLOCK_GAP;
            y += photo.height();
        }
        y += BLOCK_GAP;
        y
    }

    /// Draw `content` onto a white canvas of `size`.
    pub fn render(&self, content: &LabelContent, size: LabelSize) -> RgbaImage {
        let mut canvas =
            RgbaImage::from_pixel(size.width, size.height, Rgba([255, 255, 255, 255]));

        let name_line_h = text::line_height(&self.font, NAME_PX).ceil() as u32;
        let attr_line_h = text::line_height(&self.font, ATTR_PX).ceil() as u32;
        let cx = size.width as f32 / 2.0;

        let mut y = self.config.padding;
        for line in &content.name_lines {
            text::draw_text_centered(&mut canvas, &self.font, NAME_PX, cx, y as i32, line);
            y += name_line_h;
        }
        y += BLOCK_GAP;

        for line in &content.attribute_lines {
            text::draw_text(
                &mut canvas,
                &self.font,
                ATTR_PX,
                self.config.padding as i32,
                y as i32,
                line,
            );
            y += attr_line_h;
        }

        if let Some(photo) = &content.photo {
            y += BLOCK_GAP;
            let x = (size.width.saturating_sub(photo.width())) / 2;
            imageops::overlay(&mut canvas, photo, x as i64, y as i64);
            y += photo.height();
        }
        y += BLOCK_GAP;

        match &content.band {
            Band::Barcode(raster) => {
                let scaled = imageops::resize(
                    raster,
                    size.width,
                    self.config.band_height,
                    imageops::FilterType::Triangle,
                );
                let rgba = image::DynamicImage::ImageLuma8(scaled).to_rgba8();
                imageops::overlay(&mut canvas, &rgba, 0, y as i64);
            }
            Band::Placeholder => {
                let glyph_h = text::line_height(&self.font, PLACEHOLDER_PX).ceil() as u32;
                let glyph_y = y + (self.config.band_height.saturating_sub(glyph_h)) / 2;
                text::draw_text_centered(
                    &mut canvas,
                    &self.font,
                    PLACEHOLDER_PX,
                    cx,
                    glyph_y as i32,
                    PLACEHOLDER_GLYPH,
                );
            }
        }

        canvas
    }

    /// Measure, render and write the label to `path`.
    pub fn compose_to_file(
        &self,
        content: &LabelContent,
        path: &Path,
    ) -> Result<PathBuf, LabelError> {
        let size = self.measure(content);
        let canvas = self.render(content, size);
        canvas.save(path)?;
        tracing::debug!(
            "Wrote {}x{} label to {:?}",
            size.width,
            size.height,
            path
        );
        Ok(path.to_path_buf())
    }
}

/// Build the attribute lines for a record.
///
/// One line per present field; absent fields contribute nothing. The
/// UPC itself is always shown - it is the scanned input, not catalog
/// data.
fn attribute_text(product: &Product) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(price) = product.price {
        lines.push(format!("Price: ${price:.2}"));
    }
    lines.push(format!("UPC: {}", product.upc));
    if let Some(brand) = &product.brand {
        lines.push(format!("Brand: {brand}"));
    }
    if let Some(model) = &product.model {
        lines.push(format!("Model: {model}"));
    }
    if let Some(color) = &product.color {
        lines.push(format!("Color: {color}"));
    }
    if let Some(size) = &product.size {
        lines.push(format!("Size: {size}"));
    }
    if let Some(weight) = &product.weight {
        lines.push(format!("Weight: {weight}"));
    }
    if let Some(highest) = product.highest_price {
        lines.push(format!("Highest Price: ${highest:.2}"));
    }
    if let Some(ean) = &product.ean {
        lines.push(format!("EAN: {ean}"));
    }
    if let Some(asin) = &product.asin {
        lines.push(format!("ASIN: {asin}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    /// Composer against system fonts; tests that need one skip quietly
    /// on hosts without any.
    fn try_composer() -> Option<Composer> {
        Composer::new(LabelConfig::default()).ok()
    }

    fn widget() -> Product {
        Product {
            upc: "012345678905".to_string(),
            name: "Widget".to_string(),
            price: Some(9.99),
            brand: Some("Acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_attribute_text_only_present_fields() {
        let lines = attribute_text(&widget());

        assert_eq!(
            lines,
            vec![
                "Price: $9.99".to_string(),
                "UPC: 012345678905".to_string(),
                "Brand: Acme".to_string(),
            ]
        );
    }

    #[test]
    fn test_attribute_text_placeholder_record_is_upc_only() {
        let lines = attribute_text(&Product::invalid("000000000000"));

        assert_eq!(lines, vec!["UPC: 000000000000".to_string()]);
    }

    #[test]
    fn test_attribute_text_full_record() {
        let product = Product {
            upc: "1".to_string(),
            name: "Thing".to_string(),
            price: Some(1.5),
            highest_price: Some(3.0),
            brand: Some("B".to_string()),
            category: Some("unused on label".to_string()),
            description: Some("unused on label".to_string()),
            model: Some("M".to_string()),
            color: Some("Red".to_string()),
            size: Some("L".to_string()),
            weight: Some("2 lbs".to_string()),
            ean: Some("0000000000017".to_string()),
            asin: Some("B000TEST".to_string()),
            image_urls: vec![],
        };

        let lines = attribute_text(&product);

        // Nine present fields plus the unconditional UPC line
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Price: $1.50");
        assert_eq!(lines[1], "UPC: 1");
        assert_eq!(lines.last().unwrap(), "ASIN: B000TEST");
        // Category and description never fit a shelf label
        assert!(!lines.iter().any(|l| l.contains("unused")));
    }

    #[test]
    fn test_unknown_product_gets_placeholder_band() {
        let Some(composer) = try_composer() else { return };

        let barcode = crate::barcode::render("012345678905").unwrap();
        let content = composer.content(&Product::unknown("012345678905"), Some(barcode), None);

        assert!(matches!(content.band, Band::Placeholder));
    }

    #[test]
    fn test_invalid_record_gets_placeholder_band() {
        let Some(composer) = try_composer() else { return };

        let content = composer.content(&Product::invalid("000000000000"), None, None);

        assert!(matches!(content.band, Band::Placeholder));
        assert_eq!(content.name_lines, vec!["Invalid UPC".to_string()]);
    }

    #[test]
    fn test_known_product_gets_barcode_band() {
        let Some(composer) = try_composer() else { return };

        let barcode = crate::barcode::render("012345678905").unwrap();
        let content = composer.content(&widget(), Some(barcode), None);

        assert!(matches!(content.band, Band::Barcode(_)));
    }

    #[test]
    fn test_measure_reserves_band_and_text() {
        let Some(composer) = try_composer() else { return };

        let content = composer.content(&widget(), None, None);
        let size = composer.measure(&content);

        // Height covers the band plus all measured text - no clipping
        let config = LabelConfig::default();
        assert_eq!(size.width, config.width);
        assert!(size.height >= config.band_height + composer.band_top(&content));
    }

    #[test]
    fn test_photo_is_downscaled_to_content_width() {
        let Some(composer) = try_composer() else { return };

        let photo = RgbaImage::from_pixel(1000, 500, Rgba([10, 20, 30, 255]));
        let content = composer.content(&widget(), None, Some(photo));

        let scaled = content.photo.unwrap();
        assert_eq!(scaled.width(), composer.content_width());
        // 2:1 aspect preserved
        assert_eq!(scaled.height(), composer.content_width() / 2);
    }

    #[test]
    fn test_small_photo_is_not_upscaled() {
        let Some(composer) = try_composer() else { return };

        let photo = RgbaImage::from_pixel(100, 80, Rgba([0, 0, 0, 255]));
        let content = composer.content(&widget(), None, Some(photo));

        let kept = content.photo.unwrap();
        assert_eq!((kept.width(), kept.height()), (100, 80));
    }

    #[test]
    fn test_photo_grows_the_measured_height() {
        let Some(composer) = try_composer() else { return };

        let without = composer.measure(&composer.content(&widget(), None, None));
        let photo = RgbaImage::from_pixel(200, 150, Rgba([0, 0, 0, 255]));
        let with = composer.measure(&composer.content(&widget(), None, Some(photo)));

        assert!(with.height >= without.height + 150);
    }

    #[test]
    fn test_render_matches_measured_size() {
        let Some(composer) = try_composer() else { return };

        let barcode = crate::barcode::render("012345678905").unwrap();
        let content = composer.content(&widget(), Some(barcode), None);
        let size = composer.measure(&content);
        let canvas = composer.render(&content, size);

        assert_eq!((canvas.width(), canvas.height()), (size.width, size.height));

        // The barcode band left ink on the canvas
        let black = canvas.pixels().filter(|p| p.0[0] < 32).count();
        assert!(black > 0);
    }

    #[test]
    fn test_long_name_wraps_within_budget() {
        let Some(composer) = try_composer() else { return };

        let product = Product {
            upc: "1".to_string(),
            name: "Extremely Long Product Name That Cannot Possibly Fit On One Label Line"
                .to_string(),
            ..Default::default()
        };
        let content = composer.content(&product, None, None);

        assert!(content.name_lines.len() > 1);
        let budget = composer.content_width() as f32;
        for line in &content.name_lines {
            assert!(text::text_width(&composer.font, NAME_PX, line) <= budget);
        }
    }

    #[test]
    fn test_compose_to_file_writes_png() {
        let Some(composer) = try_composer() else { return };

        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("label.png");
        let content = composer.content(&widget(), None, None);

        let written = composer.compose_to_file(&content, &path).unwrap();

        assert_eq!(written, path);
        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.width(), LabelConfig::default().width);
    }
}
