use super::image::ArgbImage;

/// Fixed-size picture that widgets can paint.
pub trait Icon {
    fn icon_width(&self) -> u32;
    fn icon_height(&self) -> u32;

    /// Paints the icon with its top-left corner at `(x, y)` in `target`.
    fn paint_icon(&self, target: &mut ArgbImage, x: i64, y: i64);
}

/// [`Icon`] backed by a rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageIcon {
    image: ArgbImage,
}

impl ImageIcon {
    pub fn new(image: ArgbImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &ArgbImage {
        &self.image
    }

    pub fn into_image(self) -> ArgbImage {
        self.image
    }

    /// RGBA bytes, for toolkits that build icons from raw pixel data.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.image.to_rgba8()
    }
}

impl From<ArgbImage> for ImageIcon {
    fn from(image: ArgbImage) -> Self {
        Self::new(image)
    }
}

impl Icon for ImageIcon {
    fn icon_width(&self) -> u32 {
        self.image.width()
    }

    fn icon_height(&self) -> u32 {
        self.image.height()
    }

    fn paint_icon(&self, target: &mut ArgbImage, x: i64, y: i64) {
        for iy in 0..self.image.height() {
            for ix in 0..self.image.width() {
                target.blend_pixel(x + ix as i64, y + iy as i64, self.image.pixel(ix, iy));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Color;

    #[test]
    fn test_icon_size_follows_image() {
        let icon = ImageIcon::from(ArgbImage::new(7, 5));
        assert_eq!(icon.icon_width(), 7);
        assert_eq!(icon.icon_height(), 5);
        assert_eq!(icon.to_rgba8().len(), 7 * 5 * 4);
    }

    #[test]
    fn test_paint_icon_at_offset() {
        let mut image = ArgbImage::new(2, 2);
        image.set_pixel(0, 0, Color::from_rgb(0, 255, 0));
        let icon = ImageIcon::new(image);

        let mut target = ArgbImage::new(4, 4);
        icon.paint_icon(&mut target, 2, 1);
        assert_eq!(target.pixel(2, 1), Color::from_rgb(0, 255, 0));
        assert_eq!(target.pixel(0, 0), Color::TRANSPARENT);

        // Partially off-target painting is clipped.
        icon.paint_icon(&mut target, 3, 3);
        assert_eq!(target.pixel(3, 3), Color::from_rgb(0, 255, 0));
    }
}
