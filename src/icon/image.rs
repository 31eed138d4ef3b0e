use super::color::Color;

/// Row-major buffer of non-premultiplied `0xAARRGGBB` pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct ArgbImage {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl ArgbImage {
    /// Creates a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Wraps existing pixels. Returns `None` if the length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Returns the pixel at `(x, y)`, transparent when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        match self.index(x as i64, y as i64) {
            Some(i) => Color(self.pixels[i]),
            None => Color::TRANSPARENT,
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x as i64, y as i64) {
            self.pixels[i] = color.0;
        }
    }

    /// Blends `color` over the pixel at `(x, y)`; out-of-bounds writes are
    /// clipped.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(Color(self.pixels[i])).0;
        }
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p >> 24 == 0)
    }

    /// Converts to `[r, g, b, a]` bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| Color(p).to_rgba8())
            .collect()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl std::fmt::Debug for ArgbImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgbImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
