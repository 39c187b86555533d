//! Ray batch generation
//!
//! A batch is `count` rays sharing the emitter's center, with angles spread
//! evenly over `[0, 2π)`.

use std::f64::consts::TAU;

use super::geometry::{Circle, Ray};

/// Angle of ray `index` in a batch of `count`
#[inline]
pub fn ray_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * TAU
}

/// Generate a fresh batch of rays from the emitter's current center
pub fn generate_rays(emitter: &Circle, count: usize) -> Vec<Ray> {
    let mut rays = Vec::with_capacity(count);
    regenerate_rays(&mut rays, emitter, count);
    rays
}

/// Overwrite `rays` with a batch from the emitter's current center,
/// reusing the existing allocation
pub fn regenerate_rays(rays: &mut Vec<Ray>, emitter: &Circle, count: usize) {
    rays.clear();
    rays.extend((0..count).map(|i| Ray::new(emitter.center, ray_angle(i, count))));
}
