//! Text measurement, wrapping and drawing
//!
//! The greedy word packer takes its measure function as a closure so
//! layout logic stays testable without a system font installed; the
//! composer plugs in the rusttype-backed [`text_width`].

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// Measure the rendered width of `text` at `px`.
pub fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();
    let mut width: f32 = 0.0;
    for g in &glyphs {
        if let Some(bb) = g.pixel_bounding_box() {
            width = width.max(bb.max.x as f32);
        }
    }
    width
}

/// Vertical space one text line occupies at `px`.
pub fn line_height(font: &Font<'_>, px: f32) -> f32 {
    let vm = font.v_metrics(Scale::uniform(px));
    vm.ascent - vm.descent + vm.line_gap
}

/// Greedily pack words into lines no wider than `max_width`.
///
/// A word that alone exceeds the budget is hard-broken between
/// characters, so no emitted line measures wider than `max_width`
/// (single oversized characters excepted - they cannot be split).
pub fn wrap_words<F>(measure: F, max_width: f32, text: &str) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measure(word) <= max_width {
            current = word.to_string();
        } else {
            // Word alone is too wide: break it between characters
            let (chunks, rest) = break_word(&measure, max_width, word);
            lines.extend(chunks);
            current = rest;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split an oversized word into full chunks plus a trailing remainder.
fn break_word<F>(measure: &F, max_width: f32, word: &str) -> (Vec<String>, String)
where
    F: Fn(&str) -> f32,
{
    let mut chunks = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if current.is_empty() || measure(&candidate) <= max_width {
            current = candidate;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }

    (chunks, current)
}

/// Draw `text` in black at `(x, y)` (top-left of the line box).
pub fn draw_text(img: &mut RgbaImage, font: &Font<'_>, px: f32, x: i32, y: i32, text: &str) {
    let color = Rgba([0u8, 0, 0, 255]);
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline_y = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline_y)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= img.width() || py >= img.height() {
                    return;
                }
                let a = (v * 255.0) as u8;
                if a == 0 {
                    return;
                }
                let dst = img.get_pixel_mut(px, py);
                let sa = a as f32 / 255.0;
                let inv = 1.0 - sa;
                dst.0[0] = (color.0[0] as f32 * sa + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (color.0[1] as f32 * sa + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (color.0[2] as f32 * sa + dst.0[2] as f32 * inv) as u8;
                dst.0[3] = 255;
            });
        }
    }
}

/// Draw `text` horizontally centered around `cx`.
pub fn draw_text_centered(
    img: &mut RgbaImage,
    font: &Font<'_>,
    px: f32,
    cx: f32,
    y: i32,
    text: &str,
) {
    let w = text_width(font, px, text);
    let x = (cx - w / 2.0).round() as i32;
    draw_text(img, font, px, x, y, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Fake measure: 10 units per character
    fn char_measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_wrap_empty_text() {
        let lines = wrap_words(char_measure, 100.0, "");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_wrap_single_short_line() {
        let lines = wrap_words(char_measure, 100.0, "hello you");
        assert_eq!(lines, vec!["hello you"]);
    }

    #[test]
    fn test_wrap_packs_greedily() {
        // Budget of 10 chars: "aaa bbb" fits, "ccc" starts line two
        let lines = wrap_words(char_measure, 100.0, "aaa bbb ccc dddd");
        assert_eq!(lines, vec!["aaa bbb".to_string(), "ccc dddd".to_string()]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap_words(char_measure, 200.0, "  spaced   out\ttext \n here ");
        assert_eq!(lines, vec!["spaced out text here"]);
    }

    #[test]
    fn test_oversized_word_is_broken() {
        // Budget of 4 chars
        let lines = wrap_words(char_measure, 40.0, "abcdefghij");
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        for line in &lines {
            assert!(char_measure(line) <= 40.0);
        }
    }

    #[test]
    fn test_oversized_word_remainder_joins_next_word() {
        // Budget of 5 chars: "ef gh" fits on one line after the break
        let lines = wrap_words(char_measure, 50.0, "abcdefg hi");
        assert_eq!(lines, vec!["abcde", "fg hi"]);
    }

    proptest! {
        /// Wrapping never emits a line wider than the budget, for any
        /// input text, as long as a single character fits the budget.
        #[test]
        fn prop_no_line_exceeds_budget(text in "\\PC{0,200}", budget in 10.0f32..500.0) {
            let lines = wrap_words(char_measure, budget, &text);
            for line in &lines {
                prop_assert!(char_measure(line) <= budget);
            }
        }

        /// No words are lost or reordered by wrapping (whitespace-only
        /// splits, no hard breaks triggered).
        #[test]
        fn prop_words_preserved(words in proptest::collection::vec("[a-z]{1,8}", 0..30)) {
            let text = words.join(" ");
            let lines = wrap_words(char_measure, 100.0, &text);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
