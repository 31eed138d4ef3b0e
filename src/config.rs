use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::font::{FileFont, FontRegistry};
use crate::icon::{Color, IconStyle, Rotation};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: StyleSettings,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleSettings {
    pub size: Option<f32>,
    pub color: Option<String>,
    pub rotation: Option<i32>,
}

/// Icon font file to register at startup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FontEntry {
    pub family: String,
    pub path: PathBuf,
}

pub const DEFAULT_SIZE: f32 = 16.0;

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            rotation: None,
        }
    }
}

impl StyleSettings {
    /// Resolves the settings into a style, falling back to black, unrotated,
    /// [`DEFAULT_SIZE`] pixels.
    pub fn style(&self) -> IconStyle {
        let color = match self.color.as_deref().map(str::parse::<Color>) {
            Some(Ok(color)) => color,
            Some(Err(e)) => {
                log::warn!("{}", e);
                Color::BLACK
            }
            None => Color::BLACK,
        };
        IconStyle::new(self.size.unwrap_or(DEFAULT_SIZE))
            .with_color(color)
            .with_rotation(Rotation::from_quadrants(self.rotation.unwrap_or(0)))
    }
}

impl Config {
    /// Loads the user config file, or defaults if it is missing or invalid.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Registers every configured font file. Returns how many were added.
    pub fn register_fonts(&self, registry: &FontRegistry) -> usize {
        self.fonts
            .iter()
            .filter(|entry| registry.register(FileFont::new(&entry.family, &entry.path)))
            .count()
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(config_dir).join("iconfont").join("config.toml"))
    } else if let Some(home) = std::env::var_os("HOME") {
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("iconfont")
                .join("config.toml"),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.fonts.is_empty());
        let style = config.defaults.style();
        assert_eq!(style.size, DEFAULT_SIZE);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.rotation, Rotation::None);
    }

    #[test]
    fn test_parse_config() {
        let toml = r##"
            [defaults]
            size = 24.0
            color = "#FF0000"
            rotation = 1

            [[fonts]]
            family = "FontAwesome"
            path = "/usr/share/fonts/fontawesome.ttf"
        "##;
        let config: Config = toml::from_str(toml).unwrap();
        let style = config.defaults.style();
        assert_eq!(style.size, 24.0);
        assert_eq!(style.color, Color::from_rgb(255, 0, 0));
        assert_eq!(style.rotation, Rotation::Quarter);
        assert_eq!(
            config.fonts,
            vec![FontEntry {
                family: "FontAwesome".to_string(),
                path: PathBuf::from("/usr/share/fonts/fontawesome.ttf"),
            }]
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [defaults]
            rotation = 2
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.size, None);
        assert_eq!(config.defaults.style().rotation, Rotation::Half);
    }

    #[test]
    fn test_bad_color_falls_back_to_black() {
        let settings = StyleSettings {
            color: Some("chartreuse".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.style().color, Color::BLACK);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/iconfont/config.toml"));
        assert!(config.fonts.is_empty());
        assert_eq!(config.defaults.size, None);
    }

    #[test]
    fn test_register_fonts_skips_duplicates() {
        let config = Config {
            fonts: vec![
                FontEntry {
                    family: "A".to_string(),
                    path: PathBuf::from("/tmp/a.ttf"),
                },
                FontEntry {
                    family: "A".to_string(),
                    path: PathBuf::from("/tmp/other.ttf"),
                },
            ],
            ..Default::default()
        };
        let registry = FontRegistry::new();
        assert_eq!(config.register_fonts(&registry), 1);
        assert!(registry.contains("A"));
    }
}
