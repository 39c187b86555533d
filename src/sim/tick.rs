//! Per-frame simulation step
//!
//! One frame: drain input, redraw the light field from scratch, then move the
//! occluder. Presenting and pacing belong to the caller.

use glam::DVec2;

use super::march::{MarchStats, march_rays};
use super::state::{SimPhase, SimState};
use crate::consts::{COLOR_BLACK, COLOR_RAY, COLOR_WHITE};
use crate::raster::{Canvas, fill_circle};

/// Input delivered by the platform, polled once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or quit key pressed
    Quit,
    /// Pointer moved to `(x, y)`; `button_held` marks a drag
    PointerMove { x: f64, y: f64, button_held: bool },
}

/// Apply a single input event to the state
pub fn apply_event(state: &mut SimState, event: InputEvent) {
    match event {
        InputEvent::Quit => {
            log::info!("Quit requested after {} frames", state.frame);
            state.terminate();
        }
        InputEvent::PointerMove {
            x,
            y,
            button_held: true,
        } => {
            state.move_emitter(DVec2::new(x, y));
            log::debug!("Emitter dragged to ({x}, {y})");
        }
        InputEvent::PointerMove { .. } => {}
    }
}

/// Clear the canvas and draw rays, then both circles on top
pub fn draw_frame<C: Canvas + ?Sized>(state: &SimState, canvas: &mut C) -> MarchStats {
    canvas.clear(COLOR_BLACK);
    let stats = march_rays(canvas, &state.rays, COLOR_RAY, &state.occluder);
    fill_circle(canvas, &state.emitter, COLOR_WHITE);
    fill_circle(canvas, &state.occluder, COLOR_WHITE);
    stats
}

/// Move the occluder vertically and reflect it off the top and bottom edges
///
/// Both edge checks run every frame and each negates the velocity on its
/// own. Returns how many negations happened.
pub fn advance_occluder(state: &mut SimState) -> u32 {
    let mut flips = 0;
    state.occluder.center.y += state.occluder_velocity_y;

    if state.occluder.top() < 0.0 {
        state.occluder_velocity_y = -state.occluder_velocity_y;
        flips += 1;
    }
    if state.occluder.bottom() > state.bounds.y {
        state.occluder_velocity_y = -state.occluder_velocity_y;
        flips += 1;
    }

    if flips > 0 {
        log::debug!(
            "Occluder bounced at y={} (velocity now {})",
            state.occluder.center.y,
            state.occluder_velocity_y
        );
    }
    flips
}

/// Advance the simulation by one frame
///
/// All pending events are applied first. If one of them was a quit, nothing
/// is drawn and the state stays as it was.
pub fn tick<C, I>(state: &mut SimState, events: I, canvas: &mut C) -> SimPhase
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        apply_event(state, event);
    }
    if !state.is_running() {
        return state.phase;
    }

    let stats = draw_frame(state, canvas);
    log::trace!(
        "Frame {}: {} rays hit, {} escaped",
        state.frame,
        stats.hits,
        stats.escapes
    );

    advance_occluder(state);
    state.frame += 1;
    state.phase
}
