//! Geometry primitives for the light field
//!
//! A circle is a center and a radius. A ray is an origin and an angle:
//! - angle is in radians, measured from +x toward +y (screen down)
//! - origin is copied from the emitter when the ray is created

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::direction;

/// A filled circle (emitter or occluder)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center in raster coordinates
    pub center: DVec2,
    /// Radius, always > 0
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self {
            center: DVec2::new(x, y),
            radius,
        }
    }

    /// Build from an `(x, y, r)` tuple constant
    pub fn from_tuple((x, y, radius): (f64, f64, f64)) -> Self {
        Self::new(x, y, radius)
    }

    #[inline]
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Strict membership: points exactly on the boundary are outside
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance_squared(point) < self.radius_squared()
    }

    /// Topmost y covered by the circle
    #[inline]
    pub fn top(&self) -> f64 {
        self.center.y - self.radius
    }

    /// Bottommost y covered by the circle
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.center.y + self.radius
    }
}

/// A single light ray
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: DVec2,
    /// Radians
    pub angle: f64,
}

impl Ray {
    pub fn new(origin: DVec2, angle: f64) -> Self {
        Self { origin, angle }
    }

    /// Unit step direction
    #[inline]
    pub fn direction(&self) -> DVec2 {
        direction(self.angle)
    }
}
