//! Ray Shadow entry point
//!
//! Opens the window and runs the frame loop until the window is closed.

use ray_shadow::consts::*;
use ray_shadow::platform::NativeWindow;
use ray_shadow::{FrameBuffer, SimState};

fn run() -> Result<(), minifb::Error> {
    let mut window = NativeWindow::open(WINDOW_TITLE, WIDTH, HEIGHT)?;
    let mut frame = FrameBuffer::new(WIDTH, HEIGHT);
    let mut state = SimState::default();
    log::info!(
        "Emitter at {:?}, occluder at {:?}, {} rays",
        state.emitter.center,
        state.occluder.center,
        state.rays.len()
    );

    ray_shadow::run(&mut window, &mut state, &mut frame)?;
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Ray Shadow starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}
