mod face;
mod registry;

#[cfg(test)]
pub(crate) mod synth;

pub use face::{FaceMetrics, FontError, GlyphCoverage, IconFace, LoadError, MAX_FONT_SIZE};
pub use registry::{
    register, resolve_font, EmbeddedFont, FileFont, FontRegistry, IconFont, MemoryFont,
};
