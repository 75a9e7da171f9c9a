//! Per-tick force integration for banner particles.
//!
//! Forward-Euler with geometric friction decay: repulsion away from the
//! pointer, a spring pull back to each particle's rest position, then
//! `vel *= friction` and `pos += vel`. Friction < 1 guarantees settling once
//! the pointer force is gone. The pointer arrives as an explicit argument so
//! the integrator is testable without a live input surface.

use glam::Vec2;

use crate::banner::field::Particle;

/// Tuning constants for the integrator.
#[derive(Debug, Clone, Copy)]
pub struct ForceParams {
    /// Maximum distance at which the pointer repels a particle (logical px).
    pub mouse_radius: f32,
    /// Repulsion force multiplier.
    pub mouse_power: f32,
    /// Spring constant pulling particles back to their rest position.
    pub return_speed: f32,
    /// Velocity decay per tick, < 1.
    pub friction: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            mouse_radius: 60.0,
            mouse_power: 10.0,
            return_speed: 0.05,
            friction: 0.9,
        }
    }
}

/// Advance every particle by one tick.
pub fn integrate(particles: &mut [Particle], pointer: Option<Vec2>, params: &ForceParams) {
    for p in particles {
        if let Some(mouse) = pointer {
            let to_particle = p.pos - mouse;
            let d = to_particle.length();
            // Skip the repulsion term at exactly zero distance (no defined
            // direction) and beyond the repulsion radius.
            if d > 0.0 {
                let force = ((params.mouse_radius - d) / params.mouse_radius).max(0.0);
                p.vel += to_particle / d * force * params.mouse_power;
            }
        }

        p.vel -= (p.pos - p.rest) * params.return_speed;
        p.vel *= params.friction;
        p.pos += p.vel;
    }
}
