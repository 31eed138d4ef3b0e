use super::color::Color;
use super::image::ArgbImage;
use super::rotation::Rotation;
use crate::font::GlyphCoverage;

/// Off-screen drawing context over an [`ArgbImage`].
///
/// Drawing happens in user space and is mapped to the buffer through the
/// current quadrant rotation, pivoting on the buffer center. The context is
/// consumed by [`Canvas::finish`], which hands back the pixels.
pub struct Canvas {
    target: ArgbImage,
    rotation: Rotation,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: ArgbImage::new(width, height),
            rotation: Rotation::None,
        }
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Concatenates a rotation onto the current transform.
    pub fn rotate(&mut self, rotation: Rotation) {
        let quadrants = self.rotation.quadrants() as i32 + rotation.quadrants() as i32;
        self.rotation = Rotation::from_quadrants(quadrants);
    }

    /// Paints a glyph coverage mask with its pen origin at `(x, y)`.
    pub fn fill_glyph(&mut self, glyph: &GlyphCoverage, x: i64, y: i64, color: Color) {
        let left = x + glyph.left as i64;
        let top = y + glyph.top as i64;
        let (w, h) = (glyph.width as i64, glyph.height as i64);
        self.paint(|ux, uy| {
            let (gx, gy) = (ux - left, uy - top);
            if gx < 0 || gy < 0 || gx >= w || gy >= h {
                return None;
            }
            let coverage = glyph.coverage[(gy * w + gx) as usize];
            (coverage != 0).then(|| color.with_coverage(coverage))
        });
    }

    /// Draws `image` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, image: &ArgbImage, x: i64, y: i64) {
        let (w, h) = (image.width() as i64, image.height() as i64);
        self.paint(|ux, uy| {
            let (ix, iy) = (ux - x, uy - y);
            if ix < 0 || iy < 0 || ix >= w || iy >= h {
                return None;
            }
            Some(image.pixel(ix as u32, iy as u32))
        });
    }

    /// Disposes the context and returns the painted buffer.
    pub fn finish(self) -> ArgbImage {
        self.target
    }

    /// Visits every buffer pixel, asks `source` for the color at the matching
    /// user-space pixel and blends it in.
    fn paint<F>(&mut self, source: F)
    where
        F: Fn(i64, i64) -> Option<Color>,
    {
        let (width, height) = (self.target.width(), self.target.height());
        let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
        for dy in 0..height {
            for dx in 0..width {
                let (ux, uy) = self
                    .rotation
                    .inverse(dx as f64 + 0.5, dy as f64 + 0.5, cx, cy);
                if let Some(color) = source(ux.floor() as i64, uy.floor() as i64) {
                    self.target.blend_pixel(dx as i64, dy as i64, color);
                }
            }
        }
    }
}
