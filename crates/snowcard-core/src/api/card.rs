//! The card orchestrator: owns every effect and routes input to them.
//!
//! `handle_input` + `update` together are the "run one tick" function; the
//! web runner is the outer driver that invokes them on the host's frame
//! clock. Nothing here touches the DOM, so the whole card runs headless.

use glam::Vec2;

use crate::api::config::CardConfig;
use crate::api::events::CardEvent;
use crate::banner::{BannerState, ForceParams, GlyphRaster};
use crate::core::rng::Rng;
use crate::core::viewport::ViewportMetrics;
use crate::input::pointer::PointerState;
use crate::input::queue::InputEvent;
use crate::systems::music::MusicGate;
use crate::systems::panel::CardPanel;
use crate::systems::snow::SnowField;
use crate::systems::trail::{CursorTrail, SPAWN_SPEED_THRESHOLD};
use crate::systems::tree::TreeScene;

/// All card state. One instance per page.
pub struct GreetingCard {
    config: CardConfig,
    viewport: ViewportMetrics,
    pointer: PointerState,
    rng: Rng,
    pub banner: BannerState,
    pub snow: SnowField,
    pub trail: CursorTrail,
    pub tree: TreeScene,
    pub panel: CardPanel,
    pub music: MusicGate,
    events: Vec<CardEvent>,
}

impl GreetingCard {
    pub fn new(config: CardConfig) -> Self {
        let viewport = ViewportMetrics::default();
        let mut rng = Rng::new(config.seed);

        let mut banner = BannerState::new(
            config.text.clone(),
            config.banner_height,
            ForceParams::default(),
        );
        banner.rebuild_native(&viewport, &mut rng);

        let snow = SnowField::new(
            config.snow_count,
            viewport.logical_width,
            viewport.logical_height,
            &mut rng,
        );
        let trail = CursorTrail::new(config.trail_capacity);
        let tree = TreeScene::new(
            config.tree_spiral_count,
            config.tree_cone_count,
            &viewport,
            config.banner_height,
            &mut rng,
        );

        log::info!(
            "card ready: {} banner particles, {} snowflakes, {} tree points",
            banner.particle_count(),
            config.snow_count,
            tree.point_count()
        );

        Self {
            config,
            viewport,
            pointer: PointerState::new(),
            rng,
            banner,
            snow,
            trail,
            tree,
            panel: CardPanel::new(),
            music: MusicGate::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportMetrics {
        &self.viewport
    }

    /// Events emitted since the last [`Self::clear_frame_events`].
    pub fn events(&self) -> &[CardEvent] {
        &self.events
    }

    /// Clear per-frame transient data. The runner calls this once per frame
    /// before stepping.
    pub fn clear_frame_events(&mut self) {
        self.events.clear();
    }

    /// Apply one input event. Handlers stay cheap; the only expensive one is
    /// `Resize`, which re-rasterizes and rebuilds the banner synchronously.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer.update(Vec2::new(x, y), self.banner.height());
                // Fast movement below the banner sprinkles trail stars.
                if self.pointer.delta() > SPAWN_SPEED_THRESHOLD {
                    if let Some(raw) = self.pointer.raw() {
                        if raw.y > self.banner.height() {
                            self.trail.spawn(raw, &mut self.rng);
                        }
                    }
                }
            }
            InputEvent::PointerDown { .. } => {
                self.music.on_interaction(&mut self.events);
            }
            InputEvent::PointerLeave => {
                self.pointer.clear();
            }
            InputEvent::Resize { width, height, dpr } => {
                self.resize(ViewportMetrics::new(width, height, dpr));
            }
            InputEvent::OpenPanel => {
                self.panel.open(&mut self.events);
            }
            InputEvent::ClosePanel => {
                self.panel.close(&mut self.events);
            }
        }
    }

    /// Recompute metrics and rebuild everything that depends on them.
    /// Idempotent: identical metrics produce an identical particle set.
    fn resize(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
        self.snow
            .resize(viewport.logical_width, viewport.logical_height);
        self.tree.resize(&viewport, self.banner.height());
        // Native fallback rebuild; the host replaces it with its canvas
        // raster as soon as one is ready.
        self.banner.rebuild_native(&viewport, &mut self.rng);
    }

    /// The host delivered a canvas-rendered alpha raster of the banner text.
    pub fn load_raster(&mut self, raster: &GlyphRaster) {
        self.banner.rebuild_from_raster(raster, &mut self.rng);
    }

    /// Advance every effect by one fixed tick.
    pub fn update(&mut self, dt: f32) {
        self.banner.tick(self.pointer.repulsion_source());
        self.snow.tick(dt, &mut self.rng);
        self.trail.tick(dt);
        self.tree.tick(dt);
        self.panel.tick(dt, &mut self.events);
    }
}
