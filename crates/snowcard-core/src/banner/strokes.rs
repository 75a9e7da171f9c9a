//! Baked stroke-glyph font and the native text rasterizer.
//!
//! The browser rasterizes the banner text with canvas-2D `fillText` (full
//! CJK support) and hands the alpha channel over. This module is the
//! DOM-free path: a small baked font of stroke polylines, deserialized from
//! JSON, stamped into a [`GlyphRaster`] at device resolution. Tests and any
//! headless host sample exactly the same way as the browser path.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;

use crate::banner::raster::GlyphRaster;
use crate::core::viewport::ViewportMetrics;

/// Horizontal advance (em fraction) for characters missing from the font.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Extra advance between characters, as a fraction of the font size.
const LETTER_SPACING: f32 = 0.1;

/// A baked stroke font: glyph outlines as polylines in a unit em box
/// (x grows right, y grows down, baseline at y = 1).
#[derive(Debug, Deserialize)]
pub struct StrokeFont {
    pub glyphs: HashMap<String, StrokeGlyph>,
}

/// One glyph: its advance width (em fraction) and stroke polylines.
#[derive(Debug, Deserialize)]
pub struct StrokeGlyph {
    pub width: f32,
    pub strokes: Vec<Vec<[f32; 2]>>,
}

impl StrokeFont {
    /// Parse a baked stroke font from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in capitals-and-punctuation set shipped with the crate.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_FONT_JSON) {
            Ok(font) => font,
            Err(e) => {
                // Static data, so this cannot happen in practice; degrade to
                // an empty font (blank banner) rather than panic.
                log::error!("builtin stroke font failed to parse: {e}");
                Self {
                    glyphs: HashMap::new(),
                }
            }
        }
    }

    pub fn glyph(&self, c: char) -> Option<&StrokeGlyph> {
        self.glyphs.get(&c.to_string())
    }

    /// Advance width of a character in em fractions (fallback for unknowns,
    /// so spacing is preserved even when a glyph is skipped).
    pub fn advance(&self, c: char) -> f32 {
        self.glyph(c).map(|g| g.width).unwrap_or(FALLBACK_ADVANCE)
    }

    /// Total advance of a string at the given font size, in pixels.
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|c| (self.advance(c) + LETTER_SPACING) * font_size)
            .sum()
    }
}

/// Banner font size in logical pixels: capped at 45, shrinking with short
/// viewports so the text never overflows the banner strip.
pub fn banner_font_size(banner_height: f32) -> f32 {
    45.0_f32.min(banner_height * 0.7)
}

/// Rasterize `text` centered in the viewport at device resolution.
///
/// Strokes are stamped as overlapping discs along each polyline segment,
/// giving a bold rounded weight comparable to the canvas path. A zero-size
/// viewport or empty string produces a blank raster (and so an empty sample).
pub fn rasterize_text(
    font: &StrokeFont,
    text: &str,
    font_size: f32,
    viewport: &ViewportMetrics,
) -> GlyphRaster {
    let mut raster = GlyphRaster::blank(viewport.device_width(), viewport.device_height(), viewport.dpr);
    if viewport.is_empty() || text.is_empty() || font_size <= 0.0 {
        return raster;
    }

    let dpr = viewport.dpr;
    let size = font_size * dpr;
    let thickness = (size * 0.11).max(1.0);
    let total = font.measure(text, font_size) * dpr;

    let mut cursor_x = (viewport.device_width() as f32 - total) / 2.0;
    let top = (viewport.device_height() as f32 - size) / 2.0;

    for c in text.chars() {
        if let Some(glyph) = font.glyph(c) {
            for stroke in &glyph.strokes {
                stamp_polyline(&mut raster, stroke, cursor_x, top, size, thickness / 2.0);
            }
        }
        // Always advance, even for skipped characters.
        cursor_x += (font.advance(c) + LETTER_SPACING) * size;
    }

    raster
}

/// Stamp discs along a polyline mapped from em space into device pixels.
fn stamp_polyline(raster: &mut GlyphRaster, stroke: &[[f32; 2]], x: f32, y: f32, size: f32, radius: f32) {
    let map = |p: &[f32; 2]| Vec2::new(x + p[0] * size, y + p[1] * size);
    if stroke.len() == 1 {
        raster.stamp_disc(map(&stroke[0]), radius);
        return;
    }
    for pair in stroke.windows(2) {
        let a = map(&pair[0]);
        let b = map(&pair[1]);
        let len = a.distance(b);
        let steps = (len / (radius * 0.5)).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            raster.stamp_disc(a.lerp(b, t), radius);
        }
    }
}

/// Built-in stroke data: skeleton capitals and basic punctuation.
/// Coordinates live in a unit em box, y-down.
const BUILTIN_FONT_JSON: &str = r#"{
    "glyphs": {
        " ": { "width": 0.5, "strokes": [] },
        "!": { "width": 0.3, "strokes": [
            [[0.15, 0.0], [0.15, 0.65]],
            [[0.15, 0.9], [0.15, 1.0]]
        ] },
        "A": { "width": 0.7, "strokes": [
            [[0.05, 1.0], [0.35, 0.0], [0.65, 1.0]],
            [[0.17, 0.62], [0.53, 0.62]]
        ] },
        "B": { "width": 0.65, "strokes": [
            [[0.1, 0.0], [0.1, 1.0]],
            [[0.1, 0.0], [0.48, 0.04], [0.54, 0.25], [0.42, 0.46], [0.1, 0.5]],
            [[0.1, 0.5], [0.52, 0.55], [0.58, 0.78], [0.46, 0.96], [0.1, 1.0]]
        ] },
        "C": { "width": 0.65, "strokes": [
            [[0.58, 0.14], [0.36, 0.0], [0.14, 0.18], [0.07, 0.5],
             [0.14, 0.82], [0.36, 1.0], [0.58, 0.86]]
        ] },
        "D": { "width": 0.65, "strokes": [
            [[0.1, 0.0], [0.1, 1.0]],
            [[0.1, 0.0], [0.42, 0.06], [0.56, 0.3], [0.56, 0.7], [0.42, 0.94], [0.1, 1.0]]
        ] },
        "E": { "width": 0.6, "strokes": [
            [[0.55, 0.0], [0.1, 0.0], [0.1, 1.0], [0.55, 1.0]],
            [[0.1, 0.5], [0.48, 0.5]]
        ] },
        "H": { "width": 0.7, "strokes": [
            [[0.1, 0.0], [0.1, 1.0]],
            [[0.6, 0.0], [0.6, 1.0]],
            [[0.1, 0.5], [0.6, 0.5]]
        ] },
        "I": { "width": 0.3, "strokes": [
            [[0.15, 0.0], [0.15, 1.0]]
        ] },
        "L": { "width": 0.55, "strokes": [
            [[0.1, 0.0], [0.1, 1.0], [0.52, 1.0]]
        ] },
        "M": { "width": 0.8, "strokes": [
            [[0.06, 1.0], [0.06, 0.0], [0.4, 0.62], [0.74, 0.0], [0.74, 1.0]]
        ] },
        "O": { "width": 0.7, "strokes": [
            [[0.35, 0.0], [0.13, 0.16], [0.06, 0.5], [0.13, 0.84], [0.35, 1.0],
             [0.57, 0.84], [0.64, 0.5], [0.57, 0.16], [0.35, 0.0]]
        ] },
        "R": { "width": 0.65, "strokes": [
            [[0.1, 0.0], [0.1, 1.0]],
            [[0.1, 0.0], [0.5, 0.06], [0.56, 0.28], [0.44, 0.46], [0.1, 0.5]],
            [[0.22, 0.5], [0.6, 1.0]]
        ] },
        "S": { "width": 0.6, "strokes": [
            [[0.55, 0.12], [0.3, 0.0], [0.1, 0.18], [0.22, 0.4], [0.45, 0.55],
             [0.55, 0.78], [0.34, 1.0], [0.08, 0.9]]
        ] },
        "T": { "width": 0.6, "strokes": [
            [[0.02, 0.0], [0.58, 0.0]],
            [[0.3, 0.0], [0.3, 1.0]]
        ] },
        "V": { "width": 0.7, "strokes": [
            [[0.05, 0.0], [0.35, 1.0], [0.65, 0.0]]
        ] },
        "Y": { "width": 0.7, "strokes": [
            [[0.05, 0.0], [0.35, 0.46]],
            [[0.65, 0.0], [0.35, 0.46]],
            [[0.35, 0.46], [0.35, 1.0]]
        ] }
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::raster::ALPHA_THRESHOLD;

    #[test]
    fn builtin_font_parses() {
        let font = StrokeFont::builtin();
        assert!(font.glyph('A').is_some());
        assert!(font.glyph('M').is_some());
        assert!(font.glyph('a').is_none());
    }

    #[test]
    fn unknown_char_still_advances() {
        let font = StrokeFont::builtin();
        let with_unknown = font.measure("A#B", 40.0);
        let without = font.measure("AB", 40.0);
        assert!(with_unknown > without);
    }

    #[test]
    fn font_size_caps_at_45() {
        assert_eq!(banner_font_size(200.0), 45.0);
        assert!((banner_font_size(40.0) - 28.0).abs() < 1e-4);
    }

    #[test]
    fn rasterized_text_samples_non_empty() {
        let font = StrokeFont::builtin();
        let vp = ViewportMetrics::new(800.0, 200.0, 1.0);
        let raster = rasterize_text(&font, "AB", 40.0, &vp);
        assert!(!raster.sample(ALPHA_THRESHOLD).is_empty());
    }

    #[test]
    fn empty_text_yields_blank_raster() {
        let font = StrokeFont::builtin();
        let vp = ViewportMetrics::new(800.0, 200.0, 1.0);
        let raster = rasterize_text(&font, "", 40.0, &vp);
        assert!(raster.sample(ALPHA_THRESHOLD).is_empty());
    }

    #[test]
    fn zero_viewport_yields_blank_raster() {
        let font = StrokeFont::builtin();
        let vp = ViewportMetrics::new(0.0, 0.0, 1.0);
        let raster = rasterize_text(&font, "AB", 40.0, &vp);
        assert!(raster.sample(ALPHA_THRESHOLD).is_empty());
    }

    #[test]
    fn text_is_horizontally_centered() {
        let font = StrokeFont::builtin();
        let vp = ViewportMetrics::new(800.0, 200.0, 1.0);
        let coords = rasterize_text(&font, "AB", 40.0, &vp).sample(ALPHA_THRESHOLD);
        let min_x = coords.iter().map(|c| c.x).fold(f32::MAX, f32::min);
        let max_x = coords.iter().map(|c| c.x).fold(f32::MIN, f32::max);
        let center = (min_x + max_x) / 2.0;
        assert!((center - 400.0).abs() < 40.0, "center = {}", center);
    }
}
