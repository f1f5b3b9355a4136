//! Theme system for blockquill.
//!
//! This module provides the theme infrastructure for blockquill, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors following the terminal palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//! - `"nord"`: Arctic, north-bluish color palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//! - `"solarized-dark"`: Precision color scheme for machines and people
//!
//! # Examples
//!
//! ```
//! use blockquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! println!("Theme: {}", theme.name);
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the blockquill terminal UI.
///
/// # Examples
///
/// ```
/// use blockquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("nord").unwrap();
/// assert_eq!(theme.name, "nord");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is not recognized.
///
/// # Examples
///
/// ```
/// use blockquill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("default-dark").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        "solarized-dark" => ThemeColors::solarized_dark(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a sorted list of all built-in theme names.
///
/// # Examples
///
/// ```
/// use blockquill::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert!(themes.contains(&"default-dark".to_string()));
/// ```
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes: Vec<String> = [
        "default-dark",
        "default-light",
        "dracula",
        "gruvbox-dark",
        "nord",
        "solarized-dark",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();
    themes.sort();
    themes
}
