//! Rune text view configuration
//!
//! Loads layout, font and selection settings from `rune.toml`, with
//! environment variables as overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for the text view
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Line wrapping settings
    pub layout: LayoutConfig,
    /// Font settings
    pub text: TextConfig,
    /// Selection settings
    pub selection: SelectionConfig,
}

/// Line wrapping configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width lines are wrapped against, in pixels
    pub page_width: f32,
    /// Line box height used by the fixed-advance measurer
    pub line_height: f32,
    /// Advance of every grapheme when no font is configured
    pub advance: f32,
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a font file (.ttf/.otf). Enables shaped measurement.
    pub font: Option<PathBuf>,
    /// Font size in pixels
    pub font_size: Option<f32>,
    /// Extra spacing added to every line box in pixels
    pub line_padding: Option<f32>,
}

/// Selection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Whether pointer gestures select text
    pub selectable: bool,
    /// Highlight width given to selected lines with no content
    pub empty_line_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 128.0,
            line_height: 14.0,
            advance: 6.0,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selectable: true,
            empty_line_width: 8.0,
        }
    }
}

fn env_f32(name: &str) -> Option<f32> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from rune.toml in the current directory, or the
    /// defaults if it is missing or broken
    pub fn load_or_default() -> Self {
        Self::load_from_path_or_default("rune.toml")
    }

    /// Load configuration from `path`, falling back to the defaults.
    ///
    /// A missing file is expected and silent; any other failure is logged
    /// so a broken file does not go unnoticed.
    pub fn load_from_path_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Layout settings
        if let Some(width) = env_f32("RUNE_PAGE_WIDTH") {
            self.layout.page_width = width;
        }
        if let Some(height) = env_f32("RUNE_LINE_HEIGHT") {
            self.layout.line_height = height;
        }
        if let Some(advance) = env_f32("RUNE_ADVANCE") {
            self.layout.advance = advance;
        }

        // Text settings
        if let Ok(font) = std::env::var("RUNE_TEXT_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Some(size) = env_f32("RUNE_TEXT_SIZE") {
            self.text.font_size = Some(size);
        }

        // Selection settings
        if let Some(selectable) = env_flag("RUNE_SELECTABLE") {
            self.selection.selectable = selectable;
        }
        if let Some(width) = env_f32("RUNE_EMPTY_LINE_WIDTH") {
            self.selection.empty_line_width = width;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
