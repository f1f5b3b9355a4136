//! Configuration system for blockquill.
//!
//! This module provides the configuration structure for blockquill with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and merged with command-line arguments in `main`.
//!
//! # Example
//!
//! ```
//! use blockquill::config::{Config, ImageCommitPolicy};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.image_commit, ImageCommitPolicy::Append);
//!
//! // Create custom configuration
//! let custom = Config {
//!     theme: "nord".to_string(),
//!     text_block_rows: 4,
//!     ..Config::default()
//! };
//! assert_eq!(custom.text_block_rows, 4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when an image is selected while an existing block is being edited.
///
/// `Append` always adds the image as a new block at the end of the document.
/// `Replace` swaps the edited block's content for the selected image. Image
/// selections in a session that creates a block always append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCommitPolicy {
    #[default]
    Append,
    Replace,
}

impl fmt::Display for ImageCommitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageCommitPolicy::Append => write!(f, "append"),
            ImageCommitPolicy::Replace => write!(f, "replace"),
        }
    }
}

impl FromStr for ImageCommitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(ImageCommitPolicy::Append),
            "replace" => Ok(ImageCommitPolicy::Replace),
            other => Err(format!(
                "unknown image commit policy '{}' (expected 'append' or 'replace')",
                other
            )),
        }
    }
}

/// Configuration for the blockquill application.
///
/// All fields have sensible defaults via `Config::default()`, and any field
/// missing from the config file falls back to its default.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `enable_mouse` - Select blocks with clicks and the wheel (default: true)
/// * `show_block_numbers` - Number blocks in the document view (default: true)
/// * `text_block_rows` - Rows of text shown per text block, at most 200 (default: 8)
/// * `image_extensions` - File extensions accepted by the image selector
/// * `max_image_bytes` - Largest image file accepted (default: 10 MiB)
/// * `image_commit` - Image selection behavior while editing (default: append)
/// * `log_level` - Default tracing filter when `BLOCKQUILL_LOG` is unset (default: "info")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Enable mouse block selection and wheel scrolling
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,

    /// Show block numbers in block titles
    #[serde(default = "default_show_block_numbers")]
    pub show_block_numbers: bool,

    /// Rows of text displayed per text block
    #[serde(default = "default_text_block_rows")]
    pub text_block_rows: u16,

    /// File extensions accepted as images (lowercase, without dot)
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Largest image file accepted, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    /// Whether an image selected while editing appends or replaces
    #[serde(default)]
    pub image_commit: ImageCommitPolicy,

    /// Tracing filter used when the environment does not set one
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for enabling mouse support.
fn default_enable_mouse() -> bool {
    true
}

fn default_show_block_numbers() -> bool {
    true
}

/// Returns the default number of text rows per block.
fn default_text_block_rows() -> u16 {
    8
}

/// Returns the extensions accepted by the image selector.
fn default_image_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Returns the default maximum image size (10 MiB).
fn default_max_image_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Example
    ///
    /// ```
    /// use blockquill::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.theme, "default-dark");
    /// assert!(config.enable_mouse);
    /// assert_eq!(config.text_block_rows, 8);
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_mouse: default_enable_mouse(),
            show_block_numbers: default_show_block_numbers(),
            text_block_rows: default_text_block_rows(),
            image_extensions: default_image_extensions(),
            max_image_bytes: default_max_image_bytes(),
            image_commit: ImageCommitPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/blockquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("blockquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from an explicit path, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_commit_default_is_append() {
        let config = Config::default();
        assert_eq!(config.image_commit, ImageCommitPolicy::Append);
    }

    #[test]
    fn test_image_commit_parse() {
        assert_eq!(
            "Replace".parse::<ImageCommitPolicy>(),
            Ok(ImageCommitPolicy::Replace)
        );
        assert!("sideways".parse::<ImageCommitPolicy>().is_err());
    }
}
