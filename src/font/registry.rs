use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use ahash::RandomState;

use super::face::{FontError, IconFace, LoadError};

/// Describes an icon font: its family name and where its bytes come from.
pub trait IconFont: Send + Sync {
    fn font_family(&self) -> &str;

    /// Opens a fresh stream over the font file.
    ///
    /// Called without the registry lock held, so implementations may use the
    /// registry themselves.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Icon font compiled into the binary, typically via `include_bytes!`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFont {
    family: &'static str,
    data: &'static [u8],
}

impl EmbeddedFont {
    pub const fn new(family: &'static str, data: &'static [u8]) -> Self {
        Self { family, data }
    }
}

impl IconFont for EmbeddedFont {
    fn font_family(&self) -> &str {
        self.family
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.data)))
    }
}

/// Icon font loaded from disk each time it is resolved.
#[derive(Debug, Clone)]
pub struct FileFont {
    family: String,
    path: PathBuf,
}

impl FileFont {
    pub fn new(family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            family: family.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IconFont for FileFont {
    fn font_family(&self) -> &str {
        &self.family
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Icon font backed by an owned, shared buffer.
#[derive(Debug, Clone)]
pub struct MemoryFont {
    family: String,
    data: Arc<[u8]>,
}

impl MemoryFont {
    pub fn new(family: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            family: family.into(),
            data: data.into(),
        }
    }
}

impl IconFont for MemoryFont {
    fn font_family(&self) -> &str {
        &self.family
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(&self.data[..])))
    }
}

/// Registry of icon fonts keyed by family name.
///
/// Registration and lookup share one lock, so a lookup never observes a
/// partially updated map. Resolution only holds it to find the descriptor;
/// the font is read and decoded after it is released.
pub struct FontRegistry {
    fonts: Mutex<HashMap<String, Arc<dyn IconFont>, RandomState>>,
}

static GLOBAL: OnceLock<FontRegistry> = OnceLock::new();

impl FontRegistry {
    pub fn new() -> Self {
        Self {
            fonts: Mutex::new(HashMap::default()),
        }
    }

    /// Process-wide registry, empty until the first registration.
    pub fn global() -> &'static FontRegistry {
        GLOBAL.get_or_init(FontRegistry::new)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<dyn IconFont>, RandomState>> {
        self.fonts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a font unless its family is already registered.
    ///
    /// Returns `true` if the font was added.
    pub fn register<F: IconFont + 'static>(&self, font: F) -> bool {
        self.register_shared(Arc::new(font))
    }

    pub fn register_shared(&self, font: Arc<dyn IconFont>) -> bool {
        let family = font.font_family().to_string();
        let mut fonts = self.lock();
        if fonts.contains_key(&family) {
            log::debug!("Icon font already registered: {}", family);
            return false;
        }
        log::debug!("Registering icon font: {}", family);
        fonts.insert(family, font);
        true
    }

    /// Loads the named family and scales it to `size` pixels.
    pub fn resolve_font(&self, family: &str, size: f32) -> Result<IconFace, FontError> {
        let font = self.lock().get(family).cloned();
        let Some(font) = font else {
            log::error!("Font not found: {}", family);
            return Err(FontError::NotFound(family.to_string()));
        };

        let result =
            read_font(font.as_ref()).and_then(|data| IconFace::from_bytes(family, data, size));
        if let Err(e) = &result {
            log::error!("Font load failure: {}", e);
        }
        result
    }

    pub fn contains(&self, family: &str) -> bool {
        self.lock().contains_key(family)
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("families", &self.families())
            .finish()
    }
}

fn read_font(font: &dyn IconFont) -> Result<Vec<u8>, FontError> {
    let wrap = |e: io::Error| FontError::Load {
        family: font.font_family().to_string(),
        source: LoadError::Io(e),
    };
    let mut reader = font.open().map_err(wrap)?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(wrap)?;
    Ok(data)
}

/// Registers a font in the process-wide registry.
pub fn register<F: IconFont + 'static>(font: F) -> bool {
    FontRegistry::global().register(font)
}

/// Resolves a family from the process-wide registry.
pub fn resolve_font(family: &str, size: f32) -> Result<IconFace, FontError> {
    FontRegistry::global().resolve_font(family, size)
}
