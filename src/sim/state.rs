//! Simulation state
//!
//! Everything the frame loop mutates lives in [`SimState`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Ray};
use super::rays::{generate_rays, regenerate_rays};
use crate::consts::*;

/// Current phase of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Frames are being produced
    Running,
    /// Quit was requested; no further frames
    Terminated,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Light source, follows the pointer while dragged
    pub emitter: Circle,
    /// Shadow-casting circle, bounces vertically
    pub occluder: Circle,
    /// Occluder vertical velocity (units per frame)
    pub occluder_velocity_y: f64,
    /// Current ray batch, always originating at the emitter's last position
    pub rays: Vec<Ray>,
    /// Raster size the occluder bounces within
    pub bounds: DVec2,
    pub phase: SimPhase,
    /// Completed frame counter
    pub frame: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(
            Circle::from_tuple(EMITTER_START),
            Circle::from_tuple(OCCLUDER_START),
            DVec2::new(WIDTH as f64, HEIGHT as f64),
        )
    }
}

impl SimState {
    /// Create a running state with a freshly generated ray batch
    pub fn new(emitter: Circle, occluder: Circle, bounds: DVec2) -> Self {
        Self {
            emitter,
            occluder,
            occluder_velocity_y: OCCLUDER_SPEED_Y,
            rays: generate_rays(&emitter, RAYS_NUM),
            bounds,
            phase: SimPhase::Running,
            frame: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Move the emitter and rebuild the ray batch from its new center
    pub fn move_emitter(&mut self, to: DVec2) {
        self.emitter.center = to;
        regenerate_rays(&mut self.rays, &self.emitter, RAYS_NUM);
    }

    pub fn terminate(&mut self) {
        self.phase = SimPhase::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SimState::default();
        assert_eq!(state.emitter, Circle::new(200.0, 200.0, 40.0));
        assert_eq!(state.occluder, Circle::new(600.0, 300.0, 140.0));
        assert_eq!(state.occluder_velocity_y, 1.0);
        assert_eq!(state.rays.len(), 500);
        assert_eq!(state.bounds, DVec2::new(1200.0, 600.0));
        assert!(state.is_running());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_move_emitter_rebuilds_batch() {
        let mut state = SimState::default();
        state.move_emitter(DVec2::new(10.0, 590.0));
        assert_eq!(state.emitter.center, DVec2::new(10.0, 590.0));
        assert_eq!(state.emitter.radius, 40.0);
        assert_eq!(state.rays.len(), RAYS_NUM);
        assert!(state.rays.iter().all(|r| r.origin == state.emitter.center));
    }

    #[test]
    fn test_terminate() {
        let mut state = SimState::default();
        state.terminate();
        assert_eq!(state.phase, SimPhase::Terminated);
        assert!(!state.is_running());
    }
}
