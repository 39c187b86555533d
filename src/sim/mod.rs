//! Simulation module
//!
//! All light/shadow logic lives here. Drawing goes through the `Canvas`
//! trait only, so the simulation never touches a window:
//! - Deterministic fixed-step ray marching
//! - Explicit state passed into every step
//! - Stable ray order (by index in the batch)

pub mod geometry;
pub mod march;
pub mod rays;
pub mod state;
pub mod tick;

pub use geometry::{Circle, Ray};
pub use march::{MarchStats, RayOutcome, march_ray, march_rays};
pub use rays::{generate_rays, regenerate_rays};
pub use state::{SimPhase, SimState};
pub use tick::{InputEvent, advance_occluder, apply_event, draw_frame, tick};
