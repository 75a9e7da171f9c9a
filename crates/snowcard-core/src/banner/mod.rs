//! The particle text banner: glyph rasterization, sparse sampling, and the
//! pointer-reactive spring field.

pub mod field;
pub mod integrator;
pub mod raster;
pub mod strokes;

pub use field::{Particle, ParticleField};
pub use integrator::{integrate, ForceParams};
pub use raster::{GlyphRaster, ALPHA_THRESHOLD};
pub use strokes::{banner_font_size, rasterize_text, StrokeFont};

use glam::Vec2;

use crate::core::rng::Rng;
use crate::core::viewport::ViewportMetrics;

/// Facade over the banner pipeline. Owns the particle field and rebuilds it
/// from whichever raster source is current; the integrator runs every tick.
pub struct BannerState {
    text: String,
    font: StrokeFont,
    field: ParticleField,
    params: ForceParams,
    /// Logical height of the banner strip across the top of the page.
    height: f32,
}

impl BannerState {
    pub fn new(text: impl Into<String>, height: f32, params: ForceParams) -> Self {
        Self {
            text: text.into(),
            font: StrokeFont::builtin(),
            field: ParticleField::new(),
            params,
            height,
        }
    }

    /// Logical height of the banner strip.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.all()
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    /// Rebuild the field from a host-provided alpha raster (the browser's
    /// canvas-2D rendering of the text).
    pub fn rebuild_from_raster(&mut self, raster: &GlyphRaster, rng: &mut Rng) {
        let coords = raster.sample(ALPHA_THRESHOLD);
        log::debug!("banner rebuild: {} particles from host raster", coords.len());
        self.field.rebuild(&coords, rng);
    }

    /// Rebuild the field through the built-in stroke font. Used natively and
    /// as the fallback until the host delivers its first canvas raster.
    pub fn rebuild_native(&mut self, viewport: &ViewportMetrics, rng: &mut Rng) {
        let strip = ViewportMetrics::new(viewport.logical_width, self.height, viewport.dpr);
        let font_size = banner_font_size(self.height);
        let raster = rasterize_text(&self.font, &self.text, font_size, &strip);
        let coords = raster.sample(ALPHA_THRESHOLD);
        log::debug!("banner rebuild: {} particles from stroke font", coords.len());
        self.field.rebuild(&coords, rng);
    }

    /// Advance the spring field by one tick.
    pub fn tick(&mut self, pointer: Option<Vec2>) {
        integrate(self.field.all_mut(), pointer, &self.params);
    }
}
