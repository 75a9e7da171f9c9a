//! The rotating particle tree and its glowing star.
//!
//! A point cloud (spiral garland + cone fill) generated once at init and
//! projected through a fixed perspective camera into a flat 2D draw list.
//! Rotation uses a strictly monotonic accumulated angle that is never
//! renormalized, so it cannot appear to snap back after a full turn.

use glam::{Vec2, Vec3};

use crate::core::rng::Rng;
use crate::core::viewport::ViewportMetrics;

/// Rotation speed in rad/s.
const ROTATION_SPEED: f32 = 0.12;
/// Tree height in world units.
const HEIGHT_UNITS: f32 = 110.0;
/// Spiral radius at the base.
const TREE_WIDTH: f32 = 40.0;
/// Spiral turns (t * PI * 20 over the full height).
const SPIRAL_TURNS: f32 = 20.0;
/// Camera distance along +Z.
const CAMERA_Z: f32 = 175.0;
/// Vertical field of view in radians (45 degrees).
const FOV: f32 = std::f32::consts::FRAC_PI_4;
/// Base draw size of one point, in world units.
const POINT_SIZE: f32 = 2.5;
/// Star offset above the tree apex.
const STAR_LIFT: f32 = 5.6;
/// Star outer radius in world units.
const STAR_OUTER_RADIUS: f32 = 5.4;

/// Ornament palette (gold, red, green, blue, purple).
const PALETTE: [[f32; 3]; 5] = [
    [0.945, 0.769, 0.059],
    [0.906, 0.298, 0.235],
    [0.180, 0.800, 0.443],
    [0.204, 0.596, 0.859],
    [0.608, 0.349, 0.714],
];

/// One generated tree point in tree-local coordinates (y up, 0 at base).
#[derive(Debug, Clone)]
struct TreePoint {
    local: Vec3,
    color: [f32; 3],
}

/// A projected point ready for the painter.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedPoint {
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 3],
}

/// The projected star sprite.
#[derive(Debug, Clone, Copy)]
pub struct StarSprite {
    pub pos: Vec2,
    /// Projected outer radius in logical px, twinkle applied.
    pub size: f32,
    /// Glow pulse, oscillating around 1.0.
    pub twinkle: f32,
}

/// The tree scene: generated points plus camera layout.
pub struct TreeScene {
    points: Vec<TreePoint>,
    /// Accumulated rotation, strictly monotonic.
    angle: f32,
    elapsed: f32,
    /// Logical draw area (width clamped to 1000 logical px).
    width: f32,
    height: f32,
    /// Vertical offset of the whole scene, derived from the banner height.
    group_y: f32,
}

impl TreeScene {
    pub fn new(spiral_count: usize, cone_count: usize, viewport: &ViewportMetrics, banner_height: f32, rng: &mut Rng) -> Self {
        let mut scene = Self {
            points: Vec::with_capacity(spiral_count + cone_count),
            angle: 0.0,
            elapsed: 0.0,
            width: 0.0,
            height: 0.0,
            group_y: 0.0,
        };
        scene.generate(spiral_count, cone_count, rng);
        scene.resize(viewport, banner_height);
        scene
    }

    /// Generate the point cloud: a jittered spiral garland over a softly
    /// filled cone, colors picked from the palette with brightness jitter.
    fn generate(&mut self, spiral_count: usize, cone_count: usize, rng: &mut Rng) {
        self.points.clear();

        for i in 0..spiral_count {
            let t = i as f32 / spiral_count.max(1) as f32;
            let y = t * HEIGHT_UNITS;
            let angle = t * std::f32::consts::PI * SPIRAL_TURNS
                + rng.next_f32() * std::f32::consts::PI * 0.25;
            let radius = (1.0 - t) * TREE_WIDTH * rng.range(0.9, 1.1);
            self.points.push(TreePoint {
                local: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                color: jittered_color(rng, 0.6, 0.2),
            });
        }

        let max_radius = TREE_WIDTH * 0.7;
        for i in 0..cone_count {
            let t = i as f32 / cone_count.max(1) as f32;
            let y = t * HEIGHT_UNITS;
            let radius = (1.0 - t) * max_radius * rng.range(0.9, 1.05);
            let angle = rng.range(0.0, std::f32::consts::TAU);
            self.points.push(TreePoint {
                local: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                color: jittered_color(rng, 0.5, 0.3),
            });
        }

        // Fresh cloud, fresh rotation.
        self.angle = 0.0;
        log::debug!("tree generated: {} points", self.points.len());
    }

    /// Recompute the camera layout. The point cloud itself survives resizes.
    pub fn resize(&mut self, viewport: &ViewportMetrics, banner_height: f32) {
        self.width = viewport.logical_width.min(1000.0);
        self.height = viewport.logical_height;
        let avail = (self.height - (banner_height + 20.0) - 10.0).max(320.0);
        self.group_y = -avail * 0.004;
    }

    /// Advance rotation and the breathing clock.
    pub fn tick(&mut self, dt: f32) {
        self.angle += ROTATION_SPEED * dt;
        self.elapsed += dt;
    }

    /// Accumulated rotation angle (monotonic).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whole-tree breathing scale.
    fn breath(&self) -> f32 {
        1.0 + (self.elapsed * 1.1).sin() * 0.015
    }

    /// Project every point into logical screen coordinates.
    pub fn project(&self) -> impl Iterator<Item = ProjectedPoint> + '_ {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let breath = self.breath();
        let focal = (self.height / 2.0) / (FOV / 2.0).tan();
        let size_scale = self.height / 2.0;
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let group_y = self.group_y;

        self.points.iter().filter_map(move |p| {
            // Tree-local -> world: rotate around Y, breathe, drop so the
            // cloud straddles the viewport center.
            let local = p.local * breath;
            let x = local.x * cos_a + local.z * sin_a;
            let z = -local.x * sin_a + local.z * cos_a;
            let y = local.y - HEIGHT_UNITS * 0.6 + group_y;

            let depth = CAMERA_Z - z;
            if depth <= 1.0 {
                return None; // behind or on the camera plane
            }
            Some(ProjectedPoint {
                pos: Vec2::new(cx + x * focal / depth, cy - y * focal / depth),
                size: POINT_SIZE * size_scale / depth,
                color: p.color,
            })
        })
    }

    /// The star above the apex, twinkling in place and lit in sync.
    pub fn star(&self) -> StarSprite {
        let focal = (self.height / 2.0) / (FOV / 2.0).tan();
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;

        let apex_y = HEIGHT_UNITS * 0.4 + STAR_LIFT + self.group_y;
        let depth = CAMERA_Z;
        let twinkle = 1.0 + (self.elapsed * 2.0).sin() * 0.05;

        StarSprite {
            pos: Vec2::new(cx, cy - apex_y * focal / depth),
            size: STAR_OUTER_RADIUS * twinkle * focal / depth,
            twinkle,
        }
    }
}

fn jittered_color(rng: &mut Rng, base: f32, spread: f32) -> [f32; 3] {
    let c = PALETTE[rng.next_int(PALETTE.len() as u32) as usize];
    let k = base + spread * rng.next_f32();
    [c[0] * k, c[1] * k, c[2] * k]
}
