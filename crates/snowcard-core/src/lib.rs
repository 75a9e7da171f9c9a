pub mod api;
pub mod banner;
pub mod bridge;
pub mod core;
pub mod extensions;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::card::GreetingCard;
pub use api::config::CardConfig;
pub use api::events::CardEvent;
pub use banner::{BannerState, ForceParams, GlyphRaster, Particle, StrokeFont};
pub use bridge::layout::FrameLayout;
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use core::viewport::ViewportMetrics;
pub use input::pointer::PointerState;
pub use input::queue::{InputEvent, InputQueue};
pub use systems::music::MusicGate;
pub use systems::panel::{CardPanel, PanelPhase};
pub use systems::snow::{SnowField, Snowflake};
pub use systems::trail::{CursorTrail, TrailStar};
pub use systems::tree::{ProjectedPoint, StarSprite, TreeScene};

// Extensions — decoupled optional helpers
pub use extensions::Easing;
