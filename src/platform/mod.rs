//! Platform abstraction layer
//!
//! Handles the window side of the frame loop:
//! - Input events (polled, never callbacks)
//! - Presenting a finished frame buffer
//! - Frame pacing

pub mod native;

pub use native::NativeWindow;

use std::time::Duration;

use crate::raster::FrameBuffer;
use crate::sim::InputEvent;

/// What the frame loop needs from a window
pub trait Platform {
    type Error;

    /// Next pending input event, `None` once the queue is drained
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Publish a finished frame
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;

    /// Cooperative pause between frames
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
