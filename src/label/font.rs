//! Label font loading
//!
//! Tries the configured font file first, then a list of common system
//! fonts. A broken configured font degrades to the fallback scan with a
//! warning; composition only fails when nothing loads at all.

use std::path::Path;

use rusttype::Font;

use super::LabelError;

/// Common font locations on Windows
#[cfg(windows)]
const FONT_PATHS: &[&str] = &[
    r"C:\Windows\Fonts\arial.ttf",
    r"C:\Windows\Fonts\segoeui.ttf",
    r"C:\Windows\Fonts\calibri.ttf",
];

#[cfg(not(windows))]
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// Load a font file, returning None on any read or parse failure.
fn load_file(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    Font::try_from_vec(bytes)
}

/// Load the label font, preferring `configured` when set.
pub fn load_label_font(configured: Option<&Path>) -> Result<Font<'static>, LabelError> {
    if let Some(path) = configured {
        match load_file(path) {
            Some(font) => return Ok(font),
            None => {
                tracing::warn!(
                    "Configured font {:?} is missing or unreadable, falling back to system fonts",
                    path
                );
            }
        }
    }

    FONT_PATHS
        .iter()
        .find_map(|path| load_file(Path::new(path)))
        .ok_or(LabelError::FontUnavailable)
}

/// Check whether any label font can be loaded (for `check-tools`).
pub fn is_font_available(configured: Option<&Path>) -> bool {
    load_label_font(configured).is_ok()
}
