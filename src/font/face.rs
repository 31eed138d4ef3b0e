use std::fmt;
use std::sync::Arc;

/// Error raised while decoding a font descriptor's bytes.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read font data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode font data: {0}")]
    Decode(String),
}

/// Font family not found or failed to load.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),
    #[error("Font load failure for {family}: {source}")]
    Load {
        family: String,
        #[source]
        source: LoadError,
    },
    #[error("Invalid font size: {0}")]
    InvalidSize(f32),
}

impl FontError {
    /// Returns true when no registered descriptor matched the family name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FontError::NotFound(_))
    }
}

/// Vertical metrics of a face at its pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the line, positive.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line, negative.
    pub descent: f32,
    pub line_gap: f32,
}

impl FaceMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }
}

/// Coverage bitmap for a single glyph.
///
/// `left` and `top` position the bitmap relative to the pen origin on the
/// baseline, in y-down pixel space.
#[derive(Debug, Clone)]
pub struct GlyphCoverage {
    pub width: usize,
    pub height: usize,
    pub left: i32,
    pub top: i32,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

/// An icon font loaded from its descriptor and scaled to a pixel size.
#[derive(Clone)]
pub struct IconFace {
    family: Arc<str>,
    font: Arc<fontdue::Font>,
    size: f32,
}

impl IconFace {
    pub(crate) fn from_bytes(family: &str, data: Vec<u8>, size: f32) -> Result<Self, FontError> {
        validate_size(size)?;
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |e| FontError::Load {
                family: family.to_string(),
                source: LoadError::Decode(e.to_string()),
            },
        )?;

        Ok(Self {
            family: Arc::from(family),
            font: Arc::new(font),
            size,
        })
    }

    /// Returns a face sharing the same font data at a different size.
    pub fn with_size(&self, size: f32) -> Result<Self, FontError> {
        validate_size(size)?;
        Ok(Self {
            family: self.family.clone(),
            font: self.font.clone(),
            size,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Pixel size the face was scaled to.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    pub fn metrics(&self) -> FaceMetrics {
        match self.font.horizontal_line_metrics(self.size) {
            Some(lm) => FaceMetrics {
                ascent: lm.ascent,
                descent: lm.descent,
                line_gap: lm.line_gap,
            },
            None => FaceMetrics {
                ascent: self.size,
                descent: 0.0,
                line_gap: 0.0,
            },
        }
    }

    pub fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.size).advance_width
    }

    pub fn rasterize(&self, ch: char) -> GlyphCoverage {
        let (metrics, coverage) = self.font.rasterize(ch, self.size);
        GlyphCoverage {
            width: metrics.width,
            height: metrics.height,
            left: metrics.xmin,
            top: -(metrics.ymin + metrics.height as i32),
            advance: metrics.advance_width,
            coverage,
        }
    }
}

impl fmt::Debug for IconFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconFace")
            .field("family", &self.family)
            .field("size", &self.size)
            .finish()
    }
}

/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f32 = 4096.0;

fn validate_size(size: f32) -> Result<(), FontError> {
    if size.is_finite() && size > 0.0 && size <= MAX_FONT_SIZE {
        Ok(())
    } else {
        Err(FontError::InvalidSize(size))
    }
}
