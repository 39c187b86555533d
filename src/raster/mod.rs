//! Software raster
//!
//! The simulation draws through [`Canvas`]; [`FrameBuffer`] is the owned
//! `0x00RRGGBB` pixel store the platform presents.

pub mod shapes;

pub use shapes::fill_circle;

/// Drawing surface used by the simulation
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Fill the whole surface with one color
    fn clear(&mut self, color: u32);

    /// Fill an axis-aligned block. Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32);
}

/// Packed `0x00RRGGBB` pixel buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    /// Raw row-major pixels, as handed to the window
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Number of pixels currently set to `color`
    pub fn count(&self, color: u32) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

impl Canvas for FrameBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) {
        // Clip in i64 so x + w can't overflow
        let x0 = i64::from(x).clamp(0, self.width as i64) as usize;
        let y0 = i64::from(y).clamp(0, self.height as i64) as usize;
        let x1 = (i64::from(x) + i64::from(w)).clamp(0, self.width as i64) as usize;
        let y1 = (i64::from(y) + i64::from(h)).clamp(0, self.height as i64) as usize;

        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }
}
