mod builder;
mod canvas;
mod code;
mod color;
mod image;
mod rasterizer;
mod rotation;
mod wrap;

pub use builder::{
    build_font, build_icon, build_icon_with, build_image, build_image_with, build_stacked_icon,
    build_stacked_icon_with, build_stacked_image, build_stacked_image_with, stack_images,
    IconBuilder, IconStyle,
};
pub use canvas::Canvas;
pub use code::{CodePoint, IconCode};
pub use color::{Color, ParseColorError};
pub use image::ArgbImage;
pub use rasterizer::{stacked_side, Rasterizer, SoftwareRasterizer, TextExtent, GLYPH_PADDING};
pub use rotation::Rotation;
pub use wrap::{Icon, ImageIcon};
