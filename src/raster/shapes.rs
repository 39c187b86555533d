//! Filled shapes built from `fill_rect` calls

use super::Canvas;
use crate::sim::Circle;
use crate::to_pixel;

/// Fill a circle by scanning its bounding box one unit at a time
///
/// A point is painted when its squared distance to the center is strictly
/// below r², so the boundary itself stays unpainted.
pub fn fill_circle<C: Canvas + ?Sized>(canvas: &mut C, circle: &Circle, color: u32) {
    let r2 = circle.radius_squared();
    let (cx, cy) = (circle.center.x, circle.center.y);

    let mut x = cx - circle.radius;
    while x <= cx + circle.radius {
        let mut y = cy - circle.radius;
        while y <= cy + circle.radius {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy < r2 {
                canvas.fill_rect(to_pixel(x), to_pixel(y), 1, 1, color);
            }
            y += 1.0;
        }
        x += 1.0;
    }
}
