use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::icon::{Color, IconStyle, Rotation};

#[derive(Parser, Debug)]
#[command(name = "iconfont")]
#[command(version)]
#[command(about = "Render an icon font glyph to a PAM image", long_about = None)]
#[command(after_help = "\
EXAMPLES:
    iconfont --font fontawesome.ttf --code F015 --size 32 -o home.pam
    iconfont --font fontawesome.ttf --code F0C8 --stack U+F00C --color #2E7D32 -o done.pam")]
pub struct Cli {
    /// Icon font file (TTF or OTF)
    #[arg(long)]
    pub font: PathBuf,

    /// Family name to register the font under [default: file stem]
    #[arg(long)]
    pub family: Option<String>,

    /// Code point of the glyph, in hex (F015, U+F015 or 0xF015)
    #[arg(long, value_parser = parse_code_point)]
    pub code: char,

    /// Code point of a second glyph painted on top of the first
    #[arg(long, value_parser = parse_code_point)]
    pub stack: Option<char>,

    /// Font size in pixels
    #[arg(long)]
    pub size: Option<f32>,

    /// Glyph color, #RRGGBB or #AARRGGBB
    #[arg(long)]
    pub color: Option<Color>,

    /// Clockwise quarter turns
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<i32>,

    /// Config file [default: $XDG_CONFIG_HOME/iconfont/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output PAM file
    #[arg(short, long)]
    pub output: PathBuf,
}

impl Cli {
    pub fn family(&self) -> String {
        self.family.clone().unwrap_or_else(|| {
            self.font
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.font.to_string_lossy().into_owned())
        })
    }

    /// Command-line style options override the config defaults.
    pub fn style(&self, config: &Config) -> IconStyle {
        let mut style = config.defaults.style();
        if let Some(size) = self.size {
            style.size = size;
        }
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(rotation) = self.rotation {
            style.rotation = Rotation::from_quadrants(rotation);
        }
        style
    }
}

/// Parses a hex code point, with or without a `U+` or `0x` prefix.
pub fn parse_code_point(s: &str) -> Result<char, String> {
    let hex = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let value =
        u32::from_str_radix(hex, 16).map_err(|e| format!("invalid code point {s:?}: {e}"))?;
    char::from_u32(value)
        .ok_or_else(|| format!("U+{value:X} is not a valid Unicode scalar value"))
}
