//! Frame loop
//!
//! Drains input, ticks the simulation into the frame buffer, presents it and
//! waits `FRAME_DELAY`, until a quit event arrives.

use crate::consts::FRAME_DELAY;
use crate::platform::Platform;
use crate::raster::FrameBuffer;
use crate::sim::{SimState, tick};

/// Run frames until the state terminates. Returns the number of frames
/// presented.
pub fn run<P: Platform>(
    platform: &mut P,
    state: &mut SimState,
    frame: &mut FrameBuffer,
) -> Result<u64, P::Error> {
    let mut presented = 0;

    while state.is_running() {
        let events = std::iter::from_fn(|| platform.poll_event());
        tick(state, events, frame);
        if !state.is_running() {
            break;
        }

        platform.present(frame)?;
        presented += 1;
        platform.delay(FRAME_DELAY);
    }

    log::info!("Frame loop finished after {presented} frames");
    Ok(presented)
}
