use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Smallest grid that leaves the two-cell seed snake room to move.
pub const MIN_GRID_SIDE: u16 = 4;

/// Fixed tick interval in milliseconds (~33 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 30;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 15;

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Directional head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site, instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Optional on-disk configuration, read once at startup.
///
/// Every field is optional so a partial file only overrides what it names.
/// The file is never written by the game.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_ms: Option<u64>,
    pub theme: Option<String>,
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns the platform-correct configuration file path.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Loads the configuration file, treating a missing file as empty defaults.
///
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_file_config() -> Result<FileConfig, ConfigError> {
    load_file_config_from_path(&config_path())
}

fn load_file_config_from_path(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

/// Command-line overrides, applied on top of the configuration file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub tick_ms: Option<u64>,
    pub theme: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub grid: GridSize,
    pub tick_interval_ms: u64,
    pub theme: String,
}

impl Settings {
    /// Resolves settings with precedence: CLI flag, then config file, then
    /// built-in default. Out-of-range values are clamped, not rejected.
    #[must_use]
    pub fn resolve(file: &FileConfig, overrides: &Overrides) -> Self {
        let width = overrides
            .width
            .or(file.width)
            .unwrap_or(DEFAULT_GRID_WIDTH)
            .max(MIN_GRID_SIDE);
        let height = overrides
            .height
            .or(file.height)
            .unwrap_or(DEFAULT_GRID_HEIGHT)
            .max(MIN_GRID_SIDE);
        let tick_interval_ms = overrides
            .tick_ms
            .or(file.tick_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .max(MIN_TICK_INTERVAL_MS);
        let theme = overrides
            .theme
            .clone()
            .or_else(|| file.theme.clone())
            .unwrap_or_else(|| crate::theme::THEME_CLASSIC.name.to_string());

        Self {
            grid: GridSize { width, height },
            tick_interval_ms,
            theme,
        }
    }
}
