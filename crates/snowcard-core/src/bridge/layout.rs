/// Frame buffer layout.
/// Must stay in sync with the JS painter's `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Banner: max_banner_particles × 4 floats]
/// [Snow: snow_count × 4 floats]
/// [Trail: trail_capacity × 3 floats]
/// [Tree: tree_point_count × 6 floats]
/// [Star: 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init. JS reads them from
/// the header to compute section offsets dynamically.

use crate::api::config::CardConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_BANNER: usize = 1;
pub const HEADER_BANNER_COUNT: usize = 2;
pub const HEADER_MAX_SNOW: usize = 3;
pub const HEADER_SNOW_COUNT: usize = 4;
pub const HEADER_MAX_TRAIL: usize = 5;
pub const HEADER_TRAIL_COUNT: usize = 6;
pub const HEADER_MAX_TREE: usize = 7;
pub const HEADER_TREE_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per banner particle: x, y, radius, hue (wire format — never changes).
pub const BANNER_FLOATS: usize = 4;

/// Floats per snowflake: x, y, size, opacity (wire format — never changes).
pub const SNOW_FLOATS: usize = 4;

/// Floats per trail star: x, y, opacity (wire format — never changes).
pub const TRAIL_FLOATS: usize = 3;

/// Floats per tree point: x, y, size, r, g, b (wire format — never changes).
pub const TREE_FLOATS: usize = 6;

/// Floats for the star sprite: x, y, size, twinkle.
pub const STAR_FLOATS: usize = 4;

/// Floats per card event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout, derived from the card's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Maximum banner particles.
    pub max_banner: usize,
    /// Snowflake pool size.
    pub max_snow: usize,
    /// Trail star pool size.
    pub max_trail: usize,
    /// Tree point count (spiral + cone, fixed after init).
    pub max_tree: usize,
    /// Maximum card events per frame.
    pub max_events: usize,

    /// Size of banner data section in floats.
    pub banner_data_floats: usize,
    /// Size of snow data section in floats.
    pub snow_data_floats: usize,
    /// Size of trail data section in floats.
    pub trail_data_floats: usize,
    /// Size of tree data section in floats.
    pub tree_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where banner data begins.
    pub banner_data_offset: usize,
    /// Offset (in floats) where snow data begins.
    pub snow_data_offset: usize,
    /// Offset (in floats) where trail data begins.
    pub trail_data_offset: usize,
    /// Offset (in floats) where tree data begins.
    pub tree_data_offset: usize,
    /// Offset (in floats) where the star sprite begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_banner: usize,
        max_snow: usize,
        max_trail: usize,
        max_tree: usize,
        max_events: usize,
    ) -> Self {
        let banner_data_floats = max_banner * BANNER_FLOATS;
        let snow_data_floats = max_snow * SNOW_FLOATS;
        let trail_data_floats = max_trail * TRAIL_FLOATS;
        let tree_data_floats = max_tree * TREE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let banner_data_offset = HEADER_FLOATS;
        let snow_data_offset = banner_data_offset + banner_data_floats;
        let trail_data_offset = snow_data_offset + snow_data_floats;
        let tree_data_offset = trail_data_offset + trail_data_floats;
        let star_data_offset = tree_data_offset + tree_data_floats;
        let event_data_offset = star_data_offset + STAR_FLOATS;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_banner,
            max_snow,
            max_trail,
            max_tree,
            max_events,
            banner_data_floats,
            snow_data_floats,
            trail_data_floats,
            tree_data_floats,
            event_data_floats,
            banner_data_offset,
            snow_data_offset,
            trail_data_offset,
            tree_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a CardConfig.
    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(
            config.max_banner_particles,
            config.snow_count,
            config.trail_capacity,
            config.tree_spiral_count + config.tree_cone_count,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = FrameLayout::from_config(&CardConfig::default());

        assert_eq!(layout.max_banner, 8192);
        assert_eq!(layout.max_snow, 200);
        assert_eq!(layout.max_trail, 64);
        assert_eq!(layout.max_tree, 9500);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.banner_data_floats, 8192 * 4);
        assert_eq!(layout.snow_data_floats, 200 * 4);
        assert_eq!(layout.trail_data_floats, 64 * 3);
        assert_eq!(layout.tree_data_floats, 9500 * 6);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = FrameLayout::new(100, 50, 16, 300, 8);

        assert_eq!(layout.banner_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.snow_data_offset,
            layout.banner_data_offset + layout.banner_data_floats
        );
        assert_eq!(
            layout.trail_data_offset,
            layout.snow_data_offset + layout.snow_data_floats
        );
        assert_eq!(
            layout.tree_data_offset,
            layout.trail_data_offset + layout.trail_data_floats
        );
        assert_eq!(
            layout.star_data_offset,
            layout.tree_data_offset + layout.tree_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.star_data_offset + STAR_FLOATS
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = FrameLayout::new(256, 100, 32, 1000, 16);

        let expected_total =
            HEADER_FLOATS + 256 * 4 + 100 * 4 + 32 * 3 + 1000 * 6 + STAR_FLOATS + 16 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
    }
}
