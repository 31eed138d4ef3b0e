use super::canvas::Canvas;
use super::color::Color;
use super::image::ArgbImage;
use super::rotation::Rotation;
use crate::font::IconFace;

/// Extra pixels added to the measured text size in each dimension.
pub const GLYPH_PADDING: u32 = 1;

/// Preferred size of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Drawing capabilities needed to turn glyphs into bitmaps.
///
/// `Context` is the backend's off-screen drawing surface. It is created by
/// [`allocate_buffer`](Rasterizer::allocate_buffer) and consumed by
/// [`finish_buffer`](Rasterizer::finish_buffer).
pub trait Rasterizer {
    type Context;

    /// Preferred label size for `ch`: its advance by the face's line height.
    fn measure_text(&self, face: &IconFace, ch: char) -> TextExtent;

    /// Allocates a transparent off-screen context.
    fn allocate_buffer(&self, width: u32, height: u32) -> Self::Context;

    /// Rotates subsequent drawing about the buffer center.
    fn apply_rotation(&self, context: &mut Self::Context, rotation: Rotation);

    /// Paints `ch` with its left edge at x = 0 and its baseline at the ascent.
    fn paint_text(&self, context: &mut Self::Context, face: &IconFace, ch: char, color: Color);

    /// Draws `image` at the origin, source-over.
    fn composite_image(&self, context: &mut Self::Context, image: &ArgbImage);

    /// Disposes the context and returns its pixels.
    fn finish_buffer(&self, context: Self::Context) -> ArgbImage;

    /// Renders one glyph into a buffer padded by [`GLYPH_PADDING`].
    fn render_glyph(
        &self,
        ch: char,
        face: &IconFace,
        color: Color,
        rotation: Rotation,
    ) -> ArgbImage {
        let extent = self.measure_text(face, ch);
        let mut context = self.allocate_buffer(
            extent.width.saturating_add(GLYPH_PADDING),
            extent.height.saturating_add(GLYPH_PADDING),
        );
        if !rotation.is_identity() {
            self.apply_rotation(&mut context, rotation);
        }
        self.paint_text(&mut context, face, ch, color);
        self.finish_buffer(context)
    }

    /// Composites `top` over `bottom` on a square buffer large enough for
    /// both.
    fn render_stacked(
        &self,
        bottom: &ArgbImage,
        top: &ArgbImage,
        rotation: Rotation,
    ) -> ArgbImage {
        let side = stacked_side(bottom, top);
        let mut context = self.allocate_buffer(side, side);
        if !rotation.is_identity() {
            self.apply_rotation(&mut context, rotation);
        }
        self.composite_image(&mut context, bottom);
        self.composite_image(&mut context, top);
        self.finish_buffer(context)
    }
}

/// Side of the square canvas used for stacking.
pub fn stacked_side(bottom: &ArgbImage, top: &ArgbImage) -> u32 {
    bottom
        .width()
        .max(bottom.height())
        .max(top.width())
        .max(top.height())
}

/// [`Rasterizer`] that paints `fontdue` coverage masks into ARGB buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRasterizer;

impl Rasterizer for SoftwareRasterizer {
    type Context = Canvas;

    fn measure_text(&self, face: &IconFace, ch: char) -> TextExtent {
        TextExtent {
            width: face.advance(ch).max(0.0).ceil() as u32,
            height: face.metrics().line_height().max(0.0).ceil() as u32,
        }
    }

    fn allocate_buffer(&self, width: u32, height: u32) -> Canvas {
        Canvas::new(width, height)
    }

    fn apply_rotation(&self, canvas: &mut Canvas, rotation: Rotation) {
        canvas.rotate(rotation);
    }

    fn paint_text(&self, canvas: &mut Canvas, face: &IconFace, ch: char, color: Color) {
        let baseline = face.metrics().ascent.round() as i64;
        let glyph = face.rasterize(ch);
        canvas.fill_glyph(&glyph, 0, baseline, color);
    }

    fn composite_image(&self, canvas: &mut Canvas, image: &ArgbImage) {
        canvas.draw_image(image, 0, 0);
    }

    fn finish_buffer(&self, canvas: Canvas) -> ArgbImage {
        canvas.finish()
    }
}
