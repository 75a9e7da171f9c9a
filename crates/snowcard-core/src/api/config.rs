/// Configuration for the whole card, provided once at init.
/// Every tuning constant the effects share lives here. There are no config
/// files or environment variables; the host passes overrides, if any,
/// before `card_init`.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Banner greeting text.
    pub text: String,
    /// Logical height of the banner strip in px.
    pub banner_height: f32,
    /// Number of snowflakes in the pool.
    pub snow_count: usize,
    /// Cursor trail pool capacity.
    pub trail_capacity: usize,
    /// Tree spiral garland point count.
    pub tree_spiral_count: usize,
    /// Tree cone fill point count.
    pub tree_cone_count: usize,
    /// Maximum banner particles the frame buffer can carry.
    pub max_banner_particles: usize,
    /// Maximum card events per frame.
    pub max_events: usize,
    /// RNG seed for all cosmetic randomness.
    pub seed: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            text: "MERRY CHRISTMAS MY LOVE!".to_string(),
            banner_height: 120.0,
            snow_count: 200,
            trail_capacity: 64,
            tree_spiral_count: 4500,
            tree_cone_count: 5000,
            max_banner_particles: 8192,
            max_events: 32,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_values() {
        let c = CardConfig::default();
        assert_eq!(c.snow_count, 200);
        assert_eq!(c.tree_spiral_count, 4500);
        assert_eq!(c.tree_cone_count, 5000);
        assert!((c.fixed_dt - 1.0 / 60.0).abs() < 1e-9);
    }
}
