//! Cursor trail stars: small sparks scattered behind a fast-moving pointer.
//!
//! Stars live in a bounded slot pool with explicit spawn/expiry ticks, so
//! there is no per-star allocation and expiry is deterministic in tests.
//! Spawning with a full pool reuses the oldest slot.

use glam::Vec2;

use crate::core::rng::Rng;
use crate::extensions::Easing;

/// Minimum pointer movement (logical px per event) that spawns a star.
pub const SPAWN_SPEED_THRESHOLD: f32 = 1.0;

/// Star lifetime in seconds.
const LIFETIME: f32 = 1.0;

/// Scatter distance range in logical px.
const SCATTER_MIN: f32 = 20.0;
const SCATTER_MAX: f32 = 50.0;

/// One pooled trail star slot.
#[derive(Debug, Clone)]
struct TrailSlot {
    active: bool,
    origin: Vec2,
    /// Scatter target offset, reached at end of life.
    offset: Vec2,
    age: f32,
}

/// A rendered star, as handed to the painter.
#[derive(Debug, Clone, Copy)]
pub struct TrailStar {
    pub pos: Vec2,
    /// 1.0 at spawn fading linearly to 0.0 at expiry.
    pub opacity: f32,
}

/// The bounded trail pool.
pub struct CursorTrail {
    slots: Vec<TrailSlot>,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![
                TrailSlot {
                    active: false,
                    origin: Vec2::ZERO,
                    offset: Vec2::ZERO,
                    age: 0.0,
                };
                capacity
            ],
        }
    }

    /// Spawn a star at `pos` with a random scatter direction. Reuses the
    /// oldest slot when the pool is saturated.
    pub fn spawn(&mut self, pos: Vec2, rng: &mut Rng) {
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let distance = rng.range(SCATTER_MIN, SCATTER_MAX);
        let offset = Vec2::new(angle.cos(), angle.sin()) * distance;

        let slot = match self.slots.iter_mut().find(|s| !s.active) {
            Some(free) => free,
            None => match self
                .slots
                .iter_mut()
                .max_by(|a, b| a.age.total_cmp(&b.age))
            {
                Some(oldest) => oldest,
                None => return, // zero-capacity pool
            },
        };
        *slot = TrailSlot {
            active: true,
            origin: pos,
            offset,
            age: 0.0,
        };
    }

    /// Age all stars; expire the ones past their lifetime.
    pub fn tick(&mut self, dt: f32) {
        for slot in &mut self.slots {
            if !slot.active {
                continue;
            }
            slot.age += dt;
            if slot.age >= LIFETIME {
                slot.active = false;
            }
        }
    }

    /// Live stars at their current scatter position.
    pub fn stars(&self) -> impl Iterator<Item = TrailStar> + '_ {
        self.slots.iter().filter(|s| s.active).map(|s| {
            let t = (s.age / LIFETIME).clamp(0.0, 1.0);
            TrailStar {
                pos: s.origin + s.offset * Easing::QuadOut.apply(t),
                opacity: 1.0 - t,
            }
        })
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
