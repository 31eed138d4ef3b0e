use std::fmt;
use std::str::FromStr;

/// Non-premultiplied ARGB color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color(0);

    /// Creates an opaque color from RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns the same color with its alpha scaled by `coverage / 255`.
    pub const fn with_coverage(self, coverage: u8) -> Self {
        let a = (self.a() as u32 * coverage as u32 + 127) / 255;
        Self((self.0 & 0x00FF_FFFF) | (a << 24))
    }

    /// Blends `self` over `dst` (Porter-Duff source-over).
    pub fn over(self, dst: Color) -> Color {
        let sa = self.a() as u32;
        if sa == 0xFF {
            return self;
        }
        if sa == 0 {
            return dst;
        }

        let da = dst.a() as u32;
        // Output alpha scaled by 255.
        let da_rest = da * (255 - sa);
        let out_a = sa * 255 + da_rest;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }

        let mix = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa * 255 + d as u32 * da_rest + out_a / 2) / out_a) as u8
        };
        Color::from_argb(
            ((out_a + 127) / 255) as u8,
            mix(self.r(), dst.r()),
            mix(self.g(), dst.g()),
            mix(self.b(), dst.b()),
        )
    }

    /// Returns `[r, g, b, a]` bytes.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let err = || ParseColorError(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(err()),
        }
    }
}
