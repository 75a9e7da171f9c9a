use snowcard_core::bridge::layout::{
    self, FrameLayout, BANNER_FLOATS, EVENT_FLOATS, SNOW_FLOATS, TRAIL_FLOATS, TREE_FLOATS,
};
use snowcard_core::{
    CardConfig, FixedTimestep, GlyphRaster, GreetingCard, InputEvent, InputQueue,
};

/// Drives the card from the browser's frame clock.
///
/// The JS side creates one `thread_local!` CardRunner through the free
/// functions in `lib.rs`, feeds it input and `tick(dt)` every animation
/// frame, and reads the flat f32 frame buffer back to paint.
pub struct CardRunner {
    card: GreetingCard,
    input: InputQueue,
    timestep: FixedTimestep,
    layout: FrameLayout,
    /// Flat frame buffer: header + one section per effect + events.
    frame: Vec<f32>,
    frame_counter: f32,
}

impl CardRunner {
    pub fn new(config: CardConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = FrameLayout::from_config(&config);
        let mut frame = vec![0.0; layout.buffer_total_floats];

        // Capacities are written once; JS derives section offsets from them.
        frame[layout::HEADER_MAX_BANNER] = layout.max_banner as f32;
        frame[layout::HEADER_MAX_SNOW] = layout.max_snow as f32;
        frame[layout::HEADER_MAX_TRAIL] = layout.max_trail as f32;
        frame[layout::HEADER_MAX_TREE] = layout.max_tree as f32;
        frame[layout::HEADER_MAX_EVENTS] = layout.max_events as f32;
        frame[layout::HEADER_PROTOCOL_VERSION] = layout::PROTOCOL_VERSION;

        Self {
            card: GreetingCard::new(config),
            input: InputQueue::new(),
            timestep,
            layout,
            frame,
            frame_counter: 0.0,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The host delivered a canvas alpha raster for the banner text.
    pub fn load_raster(&mut self, device_width: u32, device_height: u32, dpr: f32, alpha: &[u8]) {
        if let Some(raster) = GlyphRaster::from_alpha(device_width, device_height, dpr, alpha.to_vec()) {
            self.card.load_raster(&raster);
        }
    }

    pub fn music_started(&mut self) {
        self.card.music.playback_started();
    }

    pub fn music_failed(&mut self) {
        self.card.music.playback_failed();
    }

    /// Run one frame: apply queued input, step the fixed clock, pack the
    /// frame buffer.
    pub fn tick(&mut self, dt: f32) {
        self.card.clear_frame_events();

        for event in self.input.drain() {
            self.card.handle_input(event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.card.update(self.timestep.dt());
        }

        self.pack_frame();
    }

    fn pack_frame(&mut self) {
        self.frame_counter += 1.0;
        self.frame[layout::HEADER_FRAME_COUNTER] = self.frame_counter;

        // Banner particles: x, y, radius, hue.
        let mut count = 0;
        let mut at = self.layout.banner_data_offset;
        for p in self.card.banner.particles().iter().take(self.layout.max_banner) {
            self.frame[at] = p.pos.x;
            self.frame[at + 1] = p.pos.y;
            self.frame[at + 2] = p.radius;
            self.frame[at + 3] = p.hue;
            at += BANNER_FLOATS;
            count += 1;
        }
        self.frame[layout::HEADER_BANNER_COUNT] = count as f32;

        // Snowflakes: x, y, size, opacity. Sway is applied here so the
        // painter draws verbatim.
        let mut count = 0;
        let mut at = self.layout.snow_data_offset;
        for flake in self.card.snow.flakes().iter().take(self.layout.max_snow) {
            let pos = self.card.snow.position(flake);
            self.frame[at] = pos.x;
            self.frame[at + 1] = pos.y;
            self.frame[at + 2] = flake.size;
            self.frame[at + 3] = flake.opacity;
            at += SNOW_FLOATS;
            count += 1;
        }
        self.frame[layout::HEADER_SNOW_COUNT] = count as f32;

        // Trail stars: x, y, opacity.
        let mut count = 0;
        let mut at = self.layout.trail_data_offset;
        for star in self.card.trail.stars().take(self.layout.max_trail) {
            self.frame[at] = star.pos.x;
            self.frame[at + 1] = star.pos.y;
            self.frame[at + 2] = star.opacity;
            at += TRAIL_FLOATS;
            count += 1;
        }
        self.frame[layout::HEADER_TRAIL_COUNT] = count as f32;

        // Tree points: x, y, size, r, g, b. Count varies with culling.
        let mut count = 0;
        let mut at = self.layout.tree_data_offset;
        for p in self.card.tree.project().take(self.layout.max_tree) {
            self.frame[at] = p.pos.x;
            self.frame[at + 1] = p.pos.y;
            self.frame[at + 2] = p.size;
            self.frame[at + 3] = p.color[0];
            self.frame[at + 4] = p.color[1];
            self.frame[at + 5] = p.color[2];
            at += TREE_FLOATS;
            count += 1;
        }
        self.frame[layout::HEADER_TREE_COUNT] = count as f32;

        // The star sprite: x, y, size, twinkle.
        let star = self.card.tree.star();
        let at = self.layout.star_data_offset;
        self.frame[at] = star.pos.x;
        self.frame[at + 1] = star.pos.y;
        self.frame[at + 2] = star.size;
        self.frame[at + 3] = star.twinkle;

        // Card events: kind, a, b, c.
        let mut count = 0;
        let mut at = self.layout.event_data_offset;
        for e in self.card.events().iter().take(self.layout.max_events) {
            self.frame[at] = e.kind;
            self.frame[at + 1] = e.a;
            self.frame[at + 2] = e.b;
            self.frame[at + 3] = e.c;
            at += EVENT_FLOATS;
            count += 1;
        }
        self.frame[layout::HEADER_EVENT_COUNT] = count as f32;
    }

    // ---- Pointer accessors for the JS painter ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn banner_count(&self) -> u32 {
        self.frame[layout::HEADER_BANNER_COUNT] as u32
    }

    pub fn event_count(&self) -> u32 {
        self.frame[layout::HEADER_EVENT_COUNT] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> CardRunner {
        CardRunner::new(CardConfig {
            text: "AB".to_string(),
            snow_count: 20,
            tree_spiral_count: 50,
            tree_cone_count: 50,
            ..CardConfig::default()
        })
    }

    #[test]
    fn tick_packs_header_counts() {
        let mut r = runner();
        r.push_input(InputEvent::Resize {
            width: 800.0,
            height: 600.0,
            dpr: 1.0,
        });
        r.tick(1.0 / 60.0);

        assert_eq!(r.frame[layout::HEADER_FRAME_COUNTER], 1.0);
        assert!(r.banner_count() > 0);
        assert_eq!(r.frame[layout::HEADER_SNOW_COUNT], 20.0);
        assert!(r.frame[layout::HEADER_TREE_COUNT] > 0.0);
    }

    #[test]
    fn capacities_written_at_init() {
        let r = runner();
        assert_eq!(r.frame[layout::HEADER_MAX_SNOW], 20.0);
        assert_eq!(r.frame[layout::HEADER_MAX_TREE], 100.0);
        assert_eq!(
            r.frame[layout::HEADER_PROTOCOL_VERSION],
            layout::PROTOCOL_VERSION
        );
    }

    #[test]
    fn pointer_down_event_reaches_the_buffer() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 10.0, y: 10.0 });
        r.tick(1.0 / 60.0);
        assert_eq!(r.event_count(), 1);
        let at = r.layout.event_data_offset;
        assert_eq!(r.frame[at], snowcard_core::CardEvent::PLAY_MUSIC);
    }

    #[test]
    fn events_clear_on_the_next_frame() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 10.0, y: 10.0 });
        r.tick(1.0 / 60.0);
        assert_eq!(r.event_count(), 1);
        r.tick(1.0 / 60.0);
        assert_eq!(r.event_count(), 0);
    }

    #[test]
    fn large_dt_is_clamped_by_the_step_cap() {
        let mut r = runner();
        // A ten second stall must not freeze the frame in a catch-up loop.
        r.tick(10.0);
        assert_eq!(r.frame[layout::HEADER_FRAME_COUNTER], 1.0);
    }
}
