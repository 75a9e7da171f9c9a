use bytemuck::{Pod, Zeroable};

/// A card event communicated from Rust to the JS host via the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
///
/// The host translates these into the DOM operations the core cannot own:
/// CSS class toggles on the overlay/panel and `audio.play()`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CardEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl CardEvent {
    pub const FLOATS: usize = 4;

    /// Add the `active` class to the card overlay backdrop.
    pub const SHOW_OVERLAY: f32 = 1.0;
    /// Add the `active` class to the card content (after the open delay).
    pub const SHOW_CONTENT: f32 = 2.0;
    /// Remove the `active` class from the card content.
    pub const HIDE_CONTENT: f32 = 3.0;
    /// Remove the `active` class from the overlay (after the close delay).
    pub const HIDE_OVERLAY: f32 = 4.0;
    /// Start background music playback.
    pub const PLAY_MUSIC: f32 = 5.0;

    pub fn new(kind: f32) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_four_floats() {
        assert_eq!(std::mem::size_of::<CardEvent>(), CardEvent::FLOATS * 4);
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            CardEvent::SHOW_OVERLAY,
            CardEvent::SHOW_CONTENT,
            CardEvent::HIDE_CONTENT,
            CardEvent::HIDE_OVERLAY,
            CardEvent::PLAY_MUSIC,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
