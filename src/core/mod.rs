// Pure animation and configuration logic, kept free of web-sys so the
// host-side tests can include these files directly.

pub mod clock;
pub mod config;
pub mod level;
pub mod sphere;
pub mod stripe;

pub use clock::AnimationClock;
pub use config::{ColorFilters, Variant, VisualConfig};
pub use level::{LevelSample, RenderState};
