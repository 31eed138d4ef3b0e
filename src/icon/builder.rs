use super::code::IconCode;
use super::color::Color;
use super::image::ArgbImage;
use super::rasterizer::{Rasterizer, SoftwareRasterizer};
use super::rotation::Rotation;
use super::wrap::ImageIcon;
use crate::font::{FontError, FontRegistry, IconFace};

/// Size, color and rotation used to render an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    pub rotation: Rotation,
}

impl IconStyle {
    /// Black, unrotated, at `size` pixels.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: Color::BLACK,
            rotation: Rotation::None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_rotation(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = rotation.into();
        self
    }
}

/// Renders icon codes using fonts from a [`FontRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct IconBuilder<'r, R = SoftwareRasterizer> {
    registry: &'r FontRegistry,
    rasterizer: R,
}

impl IconBuilder<'static> {
    /// Builder over the process-wide registry.
    pub fn global() -> Self {
        Self::new(FontRegistry::global())
    }
}

impl<'r> IconBuilder<'r> {
    pub fn new(registry: &'r FontRegistry) -> Self {
        Self::with_rasterizer(registry, SoftwareRasterizer)
    }
}

impl<'r, R: Rasterizer> IconBuilder<'r, R> {
    pub fn with_rasterizer(registry: &'r FontRegistry, rasterizer: R) -> Self {
        Self {
            registry,
            rasterizer,
        }
    }

    pub fn registry(&self) -> &'r FontRegistry {
        self.registry
    }

    pub fn build_font(&self, family: &str, size: f32) -> Result<IconFace, FontError> {
        self.registry.resolve_font(family, size)
    }

    pub fn build_image<C: IconCode + ?Sized>(
        &self,
        code: &C,
        size: f32,
    ) -> Result<ArgbImage, FontError> {
        self.build_image_with(code, &IconStyle::new(size))
    }

    pub fn build_image_with<C: IconCode + ?Sized>(
        &self,
        code: &C,
        style: &IconStyle,
    ) -> Result<ArgbImage, FontError> {
        let face = self.build_font(code.font_family(), style.size)?;
        Ok(self
            .rasterizer
            .render_glyph(code.unicode(), &face, style.color, style.rotation))
    }

    pub fn build_icon<C: IconCode + ?Sized>(
        &self,
        code: &C,
        size: f32,
    ) -> Result<ImageIcon, FontError> {
        self.build_icon_with(code, &IconStyle::new(size))
    }

    pub fn build_icon_with<C: IconCode + ?Sized>(
        &self,
        code: &C,
        style: &IconStyle,
    ) -> Result<ImageIcon, FontError> {
        self.build_image_with(code, style).map(ImageIcon::new)
    }

    /// Renders `top` over `bottom`.
    pub fn build_stacked_image<B, T>(
        &self,
        bottom: &B,
        top: &T,
        size: f32,
    ) -> Result<ArgbImage, FontError>
    where
        B: IconCode + ?Sized,
        T: IconCode + ?Sized,
    {
        self.build_stacked_image_with(bottom, top, &IconStyle::new(size))
    }

    /// Renders both glyphs unrotated, then stacks them with the style's
    /// rotation.
    pub fn build_stacked_image_with<B, T>(
        &self,
        bottom: &B,
        top: &T,
        style: &IconStyle,
    ) -> Result<ArgbImage, FontError>
    where
        B: IconCode + ?Sized,
        T: IconCode + ?Sized,
    {
        let flat = IconStyle {
            rotation: Rotation::None,
            ..*style
        };
        let bottom = self.build_image_with(bottom, &flat)?;
        let top = self.build_image_with(top, &flat)?;
        Ok(self.stack_images(&bottom, &top, style.rotation))
    }

    pub fn build_stacked_icon<B, T>(
        &self,
        bottom: &B,
        top: &T,
        size: f32,
    ) -> Result<ImageIcon, FontError>
    where
        B: IconCode + ?Sized,
        T: IconCode + ?Sized,
    {
        self.build_stacked_icon_with(bottom, top, &IconStyle::new(size))
    }

    pub fn build_stacked_icon_with<B, T>(
        &self,
        bottom: &B,
        top: &T,
        style: &IconStyle,
    ) -> Result<ImageIcon, FontError>
    where
        B: IconCode + ?Sized,
        T: IconCode + ?Sized,
    {
        self.build_stacked_image_with(bottom, top, style).map(ImageIcon::new)
    }

    pub fn stack_images(
        &self,
        bottom: &ArgbImage,
        top: &ArgbImage,
        rotation: Rotation,
    ) -> ArgbImage {
        self.rasterizer.render_stacked(bottom, top, rotation)
    }
}

pub fn build_font(family: &str, size: f32) -> Result<IconFace, FontError> {
    IconBuilder::global().build_font(family, size)
}

pub fn build_image<C: IconCode + ?Sized>(code: &C, size: f32) -> Result<ArgbImage, FontError> {
    IconBuilder::global().build_image(code, size)
}

pub fn build_image_with<C: IconCode + ?Sized>(
    code: &C,
    style: &IconStyle,
) -> Result<ArgbImage, FontError> {
    IconBuilder::global().build_image_with(code, style)
}

pub fn build_icon<C: IconCode + ?Sized>(code: &C, size: f32) -> Result<ImageIcon, FontError> {
    IconBuilder::global().build_icon(code, size)
}

pub fn build_icon_with<C: IconCode + ?Sized>(
    code: &C,
    style: &IconStyle,
) -> Result<ImageIcon, FontError> {
    IconBuilder::global().build_icon_with(code, style)
}

pub fn build_stacked_image<B, T>(bottom: &B, top: &T, size: f32) -> Result<ArgbImage, FontError>
where
    B: IconCode + ?Sized,
    T: IconCode + ?Sized,
{
    IconBuilder::global().build_stacked_image(bottom, top, size)
}

pub fn build_stacked_image_with<B, T>(
    bottom: &B,
    top: &T,
    style: &IconStyle,
) -> Result<ArgbImage, FontError>
where
    B: IconCode + ?Sized,
    T: IconCode + ?Sized,
{
    IconBuilder::global().build_stacked_image_with(bottom, top, style)
}

pub fn build_stacked_icon<B, T>(bottom: &B, top: &T, size: f32) -> Result<ImageIcon, FontError>
where
    B: IconCode + ?Sized,
    T: IconCode + ?Sized,
{
    IconBuilder::global().build_stacked_icon(bottom, top, size)
}

pub fn build_stacked_icon_with<B, T>(
    bottom: &B,
    top: &T,
    style: &IconStyle,
) -> Result<ImageIcon, FontError>
where
    B: IconCode + ?Sized,
    T: IconCode + ?Sized,
{
    IconBuilder::global().build_stacked_icon_with(bottom, top, style)
}

/// Composites two already rendered images, `top` over `bottom`.
pub fn stack_images(bottom: &ArgbImage, top: &ArgbImage, rotation: Rotation) -> ArgbImage {
    SoftwareRasterizer.render_stacked(bottom, top, rotation)
}
