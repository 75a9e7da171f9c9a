//! Falling snow. A fixed pool of flakes; a flake that drifts off the bottom
//! edge respawns above the top, so the pool never grows or shrinks after
//! init.

use glam::Vec2;

use crate::core::rng::Rng;

/// One snowflake. `x_frac` is the horizontal anchor as a fraction of the
/// viewport width so flakes keep their relative position across resizes.
#[derive(Debug, Clone)]
pub struct Snowflake {
    /// Horizontal anchor, 0-1 of viewport width.
    pub x_frac: f32,
    /// Vertical position in logical px (negative = above the top edge).
    pub y: f32,
    /// Diameter, 4-10 px.
    pub size: f32,
    /// Fall speed in logical px/s.
    pub speed: f32,
    /// Opacity, 0.5-1.0.
    pub opacity: f32,
    /// Phase offset for the horizontal sway.
    sway_phase: f32,
}

/// The snow layer across the whole viewport.
pub struct SnowField {
    flakes: Vec<Snowflake>,
    width: f32,
    height: f32,
    time: f32,
}

/// Sway amplitude in logical px.
const SWAY_AMPLITUDE: f32 = 12.0;
/// Sway frequency in rad/s.
const SWAY_FREQUENCY: f32 = 0.8;

impl SnowField {
    /// Spawn `count` flakes staggered across and above the viewport, so the
    /// first seconds don't show a single synchronized curtain.
    pub fn new(count: usize, width: f32, height: f32, rng: &mut Rng) -> Self {
        let mut flakes = Vec::with_capacity(count);
        for _ in 0..count {
            let mut flake = Self::fresh_flake(height, rng);
            // Initial distribution: anywhere above or inside the viewport.
            flake.y = rng.range(-height.max(1.0), height.max(1.0));
            flakes.push(flake);
        }
        Self {
            flakes,
            width,
            height,
            time: 0.0,
        }
    }

    fn fresh_flake(height: f32, rng: &mut Rng) -> Snowflake {
        // A full screen traversal takes 5-15 s.
        let duration = rng.range(5.0, 15.0);
        Snowflake {
            x_frac: rng.next_f32(),
            y: -10.0,
            size: rng.range(4.0, 10.0),
            speed: height.max(1.0) / duration,
            opacity: rng.range(0.5, 1.0),
            sway_phase: rng.range(0.0, std::f32::consts::TAU),
        }
    }

    /// Adopt new viewport dimensions. Fall speeds scale with the height so
    /// every flake keeps its 5-15 s traversal time instead of waiting for a
    /// respawn to pick up the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.height > 0.0 && height > 0.0 {
            let scale = height / self.height;
            for flake in &mut self.flakes {
                flake.speed *= scale;
            }
        }
        self.width = width;
        self.height = height;
    }

    /// Advance all flakes; wrap the ones that left the bottom edge.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng) {
        self.time += dt;
        let height = self.height;
        for flake in &mut self.flakes {
            flake.y += flake.speed * dt;
            if flake.y > height + flake.size {
                *flake = Self::fresh_flake(height, rng);
            }
        }
    }

    /// Current draw position of a flake, sway included.
    pub fn position(&self, flake: &Snowflake) -> Vec2 {
        let sway = (self.time * SWAY_FREQUENCY + flake.sway_phase).sin() * SWAY_AMPLITUDE;
        Vec2::new(flake.x_frac * self.width + sway, flake.y)
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_fixed() {
        let mut rng = Rng::new(42);
        let mut snow = SnowField::new(200, 800.0, 600.0, &mut rng);
        assert_eq!(snow.len(), 200);
        for _ in 0..10_000 {
            snow.tick(1.0 / 60.0, &mut rng);
        }
        assert_eq!(snow.len(), 200);
    }

    #[test]
    fn flakes_fall_downward() {
        let mut rng = Rng::new(42);
        let mut snow = SnowField::new(10, 800.0, 600.0, &mut rng);
        let before: Vec<f32> = snow.flakes().iter().map(|f| f.y).collect();
        snow.tick(1.0, &mut rng);
        for (f, y0) in snow.flakes().iter().zip(before) {
            assert!(f.y > y0 || f.y <= 0.0, "flake went up without wrapping");
        }
    }

    #[test]
    fn offscreen_flakes_respawn_above_top() {
        let mut rng = Rng::new(42);
        let mut snow = SnowField::new(50, 800.0, 100.0, &mut rng);
        // Long enough for every flake to cross the 100 px viewport at least once.
        for _ in 0..60 * 40 {
            snow.tick(1.0 / 60.0, &mut rng);
        }
        for f in snow.flakes() {
            assert!(f.y <= 100.0 + f.size, "flake stuck below viewport: {}", f.y);
        }
    }

    #[test]
    fn resize_rescales_fall_speeds() {
        let mut rng = Rng::new(42);
        let mut snow = SnowField::new(30, 800.0, 600.0, &mut rng);
        let before: Vec<f32> = snow.flakes().iter().map(|f| f.speed).collect();

        snow.resize(1000.0, 1200.0);
        for (f, s0) in snow.flakes().iter().zip(&before) {
            assert!((f.speed - s0 * 2.0).abs() < 1e-4);
            // Traversal time is preserved across the resize.
            let duration = 1200.0 / f.speed;
            assert!((5.0..15.0).contains(&duration), "duration = {duration}");
        }
    }

    #[test]
    fn attributes_within_tuned_ranges() {
        let mut rng = Rng::new(42);
        let snow = SnowField::new(100, 800.0, 600.0, &mut rng);
        for f in snow.flakes() {
            assert!((4.0..10.0).contains(&f.size));
            assert!((0.5..1.0).contains(&f.opacity));
            assert!((0.0..=1.0).contains(&f.x_frac));
        }
    }
}
