//! Ray Shadow - 2D light and shadow visualization
//!
//! Core modules:
//! - `sim`: Simulation state, ray generation, ray marching and the per-frame tick
//! - `raster`: Software frame buffer and the `Canvas` drawing seam
//! - `platform`: Window, input polling and presentation
//! - `app`: Frame loop tying the simulation to a platform

pub mod app;
pub mod platform;
pub mod raster;
pub mod sim;

pub use app::run;
pub use raster::{Canvas, FrameBuffer};
pub use sim::{InputEvent, SimPhase, SimState, tick};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window dimensions
    pub const WIDTH: usize = 1200;
    pub const HEIGHT: usize = 600;
    pub const WINDOW_TITLE: &str = "Raytracing";

    /// Number of rays in a batch, raise for a more solid light field
    pub const RAYS_NUM: usize = 500;
    /// Side of the square block painted at every ray step
    pub const RAY_THICKNESS: u32 = 5;
    /// Distance a ray advances per marching step
    pub const RAY_STEP: f64 = 1.0;

    /// Colors (0x00RRGGBB)
    pub const COLOR_WHITE: u32 = 0x00FF_FFFF;
    pub const COLOR_BLACK: u32 = 0x0000_0000;
    pub const COLOR_RAY: u32 = 0x00E3_D26F;

    /// Light emitter starting position and radius
    pub const EMITTER_START: (f64, f64, f64) = (200.0, 200.0, 40.0);
    /// Shadow-casting circle starting position and radius
    pub const OCCLUDER_START: (f64, f64, f64) = (600.0, 300.0, 140.0);
    /// Vertical occluder speed (units per frame)
    pub const OCCLUDER_SPEED_Y: f64 = 1.0;

    /// Pause at the end of every frame
    pub const FRAME_DELAY: Duration = Duration::from_millis(10);
}

/// Unit direction vector for an angle in radians
#[inline]
pub fn direction(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Convert a float raster coordinate to a pixel index (truncates toward zero)
#[inline]
pub fn to_pixel(v: f64) -> i32 {
    v as i32
}
