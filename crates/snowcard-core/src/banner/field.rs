//! Particle storage for the text banner.

use glam::Vec2;

use crate::core::rng::Rng;

/// A single banner particle, anchored to one sampled glyph pixel.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Anchor coordinate the particle is pulled back toward (logical px).
    pub rest: Vec2,
    /// Current position (logical px).
    pub pos: Vec2,
    /// Current velocity (logical px per tick).
    pub vel: Vec2,
    /// Draw radius, 0.6-1.8 px.
    pub radius: f32,
    /// Hue in the warm gold/orange band, 10-50 degrees.
    pub hue: f32,
    /// Cosmetic mass-like scalar; jitters per-particle response.
    pub density: f32,
}

/// Owns the banner's particle collection. The whole collection is replaced
/// on resize; individual particles are never destroyed. Position and
/// velocity mutation belongs to the integrator, not this type.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Discard all particles and create exactly one per coordinate: at rest,
    /// zero velocity, cosmetic attributes drawn from `rng`.
    pub fn rebuild(&mut self, coords: &[Vec2], rng: &mut Rng) {
        self.particles.clear();
        self.particles.reserve(coords.len());
        for &rest in coords {
            self.particles.push(Particle {
                rest,
                pos: rest,
                vel: Vec2::ZERO,
                radius: rng.range(0.6, 1.8),
                hue: rng.range(10.0, 50.0),
                density: rng.range(1.0, 21.0),
            });
        }
    }

    pub fn all(&self) -> &[Particle] {
        &self.particles
    }

    pub fn all_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
