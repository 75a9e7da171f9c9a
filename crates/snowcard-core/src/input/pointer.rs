use glam::Vec2;

/// Sentinel coordinate meaning "no pointer anywhere near the card".
/// Far enough off-screen that no repulsion radius can reach it.
pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Live pointer state, overwritten on every pointer-move event.
///
/// The banner only reacts while the cursor is inside or just below its area
/// (within [`PointerState::BANNER_SLACK`] logical px of the bottom edge);
/// beyond that the position snaps back to the sentinel so the integrator
/// applies no repulsion. The movement delta feeds the trail's speed gate.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pos: Vec2,
    /// Last raw cursor position, regardless of the banner gate.
    last_raw: Vec2,
    /// Distance moved since the previous pointer-move event.
    delta: f32,
}

impl PointerState {
    /// How far below the banner the cursor may be and still repel particles.
    pub const BANNER_SLACK: f32 = 100.0;

    pub fn new() -> Self {
        Self {
            pos: OFFSCREEN,
            last_raw: OFFSCREEN,
            delta: 0.0,
        }
    }

    /// Record a pointer-move at raw logical coordinates, gated against the
    /// banner's bottom edge.
    pub fn update(&mut self, raw: Vec2, banner_bottom: f32) {
        self.delta = if self.last_raw == OFFSCREEN {
            0.0
        } else {
            raw.distance(self.last_raw)
        };
        self.last_raw = raw;
        self.pos = if raw.y <= banner_bottom + Self::BANNER_SLACK {
            raw
        } else {
            OFFSCREEN
        };
    }

    /// Reset to the sentinel (pointer left the document).
    pub fn clear(&mut self) {
        self.pos = OFFSCREEN;
        self.last_raw = OFFSCREEN;
        self.delta = 0.0;
    }

    /// Position for the repulsion force, or `None` while at the sentinel.
    pub fn repulsion_source(&self) -> Option<Vec2> {
        (self.pos != OFFSCREEN).then_some(self.pos)
    }

    /// Raw cursor position (not gated), or `None` before first interaction.
    pub fn raw(&self) -> Option<Vec2> {
        (self.last_raw != OFFSCREEN).then_some(self.last_raw)
    }

    /// Distance moved by the last pointer-move event.
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        let p = PointerState::new();
        assert!(p.repulsion_source().is_none());
        assert!(p.raw().is_none());
    }

    #[test]
    fn move_inside_banner_is_live() {
        let mut p = PointerState::new();
        p.update(Vec2::new(50.0, 40.0), 100.0);
        assert_eq!(p.repulsion_source(), Some(Vec2::new(50.0, 40.0)));
    }

    #[test]
    fn move_far_below_banner_snaps_to_sentinel() {
        let mut p = PointerState::new();
        p.update(Vec2::new(50.0, 300.0), 100.0);
        assert!(p.repulsion_source().is_none());
        // Raw position is still tracked for the trail.
        assert_eq!(p.raw(), Some(Vec2::new(50.0, 300.0)));
    }

    #[test]
    fn delta_measures_movement() {
        let mut p = PointerState::new();
        p.update(Vec2::new(0.0, 0.0), 100.0);
        assert_eq!(p.delta(), 0.0); // first move has no previous sample
        p.update(Vec2::new(3.0, 4.0), 100.0);
        assert_eq!(p.delta(), 5.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut p = PointerState::new();
        p.update(Vec2::new(10.0, 10.0), 100.0);
        p.clear();
        assert!(p.repulsion_source().is_none());
        assert_eq!(p.delta(), 0.0);
    }
}
