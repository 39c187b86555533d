//! Fixed-step ray marching against the occluder
//!
//! Each ray advances `RAY_STEP` units at a time, painting a
//! `RAY_THICKNESS`-sided block at every step. A ray stops when it leaves the
//! raster (escape) or when a step lands strictly inside the occluder (hit).
//! The block for the final step is still painted, nothing after it is.

use glam::DVec2;

use super::geometry::{Circle, Ray};
use crate::consts::{RAY_STEP, RAY_THICKNESS};
use crate::raster::Canvas;
use crate::to_pixel;

/// How a single ray terminated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayOutcome {
    /// Left the raster without touching the occluder
    Escaped { steps: u32 },
    /// Entered the occluder at `point` on step `steps`
    Hit { steps: u32, point: DVec2 },
}

impl RayOutcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, RayOutcome::Hit { .. })
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        match *self {
            RayOutcome::Escaped { steps } | RayOutcome::Hit { steps, .. } => steps,
        }
    }
}

/// Per-frame tally of ray outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarchStats {
    pub hits: usize,
    pub escapes: usize,
}

impl MarchStats {
    fn record(&mut self, outcome: RayOutcome) {
        if outcome.is_hit() {
            self.hits += 1;
        } else {
            self.escapes += 1;
        }
    }
}

/// March one ray, painting as it goes
pub fn march_ray<C: Canvas + ?Sized>(
    canvas: &mut C,
    ray: &Ray,
    color: u32,
    occluder: &Circle,
) -> RayOutcome {
    let max = DVec2::new(canvas.width() as f64, canvas.height() as f64);
    let step = ray.direction() * RAY_STEP;

    let mut pos = ray.origin;
    let mut steps = 0u32;
    loop {
        pos += step;
        steps += 1;
        canvas.fill_rect(
            to_pixel(pos.x),
            to_pixel(pos.y),
            RAY_THICKNESS,
            RAY_THICKNESS,
            color,
        );

        let escaped = pos.x < 0.0 || pos.x > max.x || pos.y < 0.0 || pos.y > max.y;

        if occluder.contains(pos) {
            return RayOutcome::Hit { steps, point: pos };
        }
        if escaped {
            return RayOutcome::Escaped { steps };
        }
    }
}

/// March every ray in the batch against the occluder
pub fn march_rays<C: Canvas + ?Sized>(
    canvas: &mut C,
    rays: &[Ray],
    color: u32,
    occluder: &Circle,
) -> MarchStats {
    let mut stats = MarchStats::default();
    for ray in rays {
        stats.record(march_ray(canvas, ray, color, occluder));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HEIGHT, RAYS_NUM, WIDTH};
    use crate::raster::FrameBuffer;
    use crate::sim::generate_rays;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const LIGHT: u32 = 0x00E3_D26F;

    fn screen() -> FrameBuffer {
        FrameBuffer::new(WIDTH, HEIGHT)
    }

    fn far_occluder() -> Circle {
        Circle::new(50_000.0, 50_000.0, 10.0)
    }

    #[test]
    fn test_ray_escapes_right_edge() {
        let mut fb = screen();
        let ray = Ray::new(DVec2::new(200.0, 200.0), 0.0);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &far_occluder());

        // x = 1201 is the first position past the right edge
        assert_eq!(outcome, RayOutcome::Escaped { steps: 1001 });
        assert_eq!(fb.pixel(201, 200), Some(LIGHT));
        assert_eq!(fb.pixel(1199, 204), Some(LIGHT));
        // Nothing behind the origin
        assert_eq!(fb.pixel(199, 200), Some(0));
    }

    #[test]
    fn test_ray_escapes_top_edge() {
        let mut fb = screen();
        let ray = Ray::new(DVec2::new(300.0, 10.0), 3.0 * FRAC_PI_2);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &far_occluder());
        assert!(!outcome.is_hit());
        assert_eq!(outcome.steps(), 11);
    }

    #[test]
    fn test_ray_stops_at_first_step_inside_occluder() {
        let mut fb = screen();
        let occluder = Circle::new(600.0, 300.0, 140.0);
        let ray = Ray::new(DVec2::new(200.0, 300.0), 0.0);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &occluder);

        // x = 460 sits on the boundary, x = 461 is the first point inside
        assert_eq!(
            outcome,
            RayOutcome::Hit {
                steps: 261,
                point: DVec2::new(461.0, 300.0),
            }
        );
        // The entering block is painted
        assert_eq!(fb.pixel(461, 300), Some(LIGHT));
        assert_eq!(fb.pixel(465, 304), Some(LIGHT));
        // Nothing past it
        assert_eq!(fb.pixel(466, 300), Some(0));
        assert_eq!(fb.pixel(600, 300), Some(0));
        assert_eq!(fb.pixel(900, 300), Some(0));
    }

    #[test]
    fn test_ray_away_from_occluder_never_hits() {
        let mut fb = screen();
        let occluder = Circle::new(600.0, 300.0, 140.0);
        let ray = Ray::new(DVec2::new(200.0, 300.0), PI);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &occluder);
        assert_eq!(outcome, RayOutcome::Escaped { steps: 201 });
    }

    #[test]
    fn test_origin_inside_occluder_hits_on_first_step() {
        let mut fb = screen();
        let occluder = Circle::new(600.0, 300.0, 140.0);
        let ray = Ray::new(DVec2::new(600.0, 300.0), 1.0);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &occluder);
        assert!(outcome.is_hit());
        assert_eq!(outcome.steps(), 1);
    }

    #[test]
    fn test_origin_outside_raster_escapes_immediately() {
        let mut fb = screen();
        let ray = Ray::new(DVec2::new(-50.0, -50.0), PI);
        let outcome = march_ray(&mut fb, &ray, LIGHT, &far_occluder());
        assert_eq!(outcome, RayOutcome::Escaped { steps: 1 });
        assert_eq!(fb.count(LIGHT), 0);
    }

    #[test]
    fn test_batch_casts_a_shadow() {
        let mut fb = screen();
        let emitter = Circle::new(200.0, 200.0, 40.0);
        let occluder = Circle::new(600.0, 300.0, 140.0);
        let rays = generate_rays(&emitter, RAYS_NUM);

        let stats = march_rays(&mut fb, &rays, LIGHT, &occluder);
        assert_eq!(stats.hits + stats.escapes, RAYS_NUM);
        assert!(stats.hits > 0);
        assert!(stats.escapes > stats.hits);

        // Behind the occluder, on the far side from the emitter
        assert_eq!(fb.pixel(900, 420), Some(0));
        // Open space on the emitter's side
        assert_eq!(fb.pixel(201, 200), Some(LIGHT));
    }

    proptest! {
        #[test]
        fn test_distant_occluder_never_hit(
            x in 0.0..1200.0f64,
            y in 0.0..600.0f64,
            angle in 0.0..std::f64::consts::TAU,
        ) {
            let mut fb = FrameBuffer::new(WIDTH, HEIGHT);
            let ray = Ray::new(DVec2::new(x, y), angle);
            let outcome = march_ray(&mut fb, &ray, LIGHT, &far_occluder());
            prop_assert!(!outcome.is_hit());
            // Bounded by the screen diagonal
            prop_assert!(outcome.steps() <= 1343);
        }
    }
}
