//! Render icon font glyphs to ARGB bitmaps and widget icons.
//!
//! ```no_run
//! use iconfont_raster::font::{register, MemoryFont};
//! use iconfont_raster::icon::{build_icon_with, CodePoint, Color, IconStyle};
//!
//! const HOME: CodePoint = CodePoint::new("FontAwesome", '\u{F015}');
//!
//! register(MemoryFont::new("FontAwesome", std::fs::read("fontawesome.ttf")?));
//! let style = IconStyle::new(24.0).with_color(Color::from_rgb(0x33, 0x66, 0x99));
//! let icon = build_icon_with(&HOME, &style)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod font;
pub mod icon;
