//! Color definitions for blockquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the blockquill terminal UI. Colors are organized into three
//! categories: block colors, UI elements, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a blockquill theme.
///
/// - **Block colors**: Text and image block content, borders and controls
/// - **UI colors**: Background, foreground, cursor, toolbar, status line, modal
/// - **Semantic colors**: Errors, warnings and informational messages
///
/// # Examples
///
/// ```
/// use blockquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Text: {:?}", dark.text);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Block colors
    /// Color for text block content.
    pub text: Color,
    /// Color for image block descriptions.
    pub image: Color,
    /// Border color for blocks.
    pub block_border: Color,
    /// Border color for the active block.
    pub active_border: Color,
    /// Color for the edit/delete controls on the active block.
    pub controls: Color,

    // UI colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the draft cursor.
    pub cursor: Color,
    /// Background color for the toolbar.
    pub toolbar_bg: Color,
    /// Foreground color for the toolbar.
    pub toolbar_fg: Color,
    /// Background color of a format toggle that is switched on.
    pub toggle_on: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Border color for the add/edit modal.
    pub modal_border: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors, so the actual RGB values follow the user's terminal
    /// color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            text: Color::Gray,
            image: Color::Magenta,
            block_border: Color::DarkGray,
            active_border: Color::LightBlue,
            controls: Color::Yellow,

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            toolbar_bg: Color::Blue,
            toolbar_fg: Color::White,
            toggle_on: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            modal_border: Color::LightBlue,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            text: Color::Rgb(56, 58, 66),
            image: Color::Rgb(166, 38, 164),
            block_border: Color::Rgb(200, 200, 200),
            active_border: Color::Rgb(82, 139, 255),
            controls: Color::Rgb(152, 104, 1),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            toolbar_bg: Color::Rgb(22, 119, 255),
            toolbar_fg: Color::Rgb(255, 255, 255),
            toggle_on: Color::Rgb(9, 88, 217),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            modal_border: Color::Rgb(1, 132, 188),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    ///
    /// A retro groove color scheme with warm, earthy tones.
    pub fn gruvbox_dark() -> Self {
        Self {
            text: Color::Rgb(235, 219, 178),         // light fg
            image: Color::Rgb(211, 134, 155),        // purple
            block_border: Color::Rgb(102, 92, 84),   // bg3
            active_border: Color::Rgb(251, 184, 108), // orange
            controls: Color::Rgb(250, 189, 47),      // yellow

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            toolbar_bg: Color::Rgb(60, 56, 54),
            toolbar_fg: Color::Rgb(235, 219, 178),
            toggle_on: Color::Rgb(215, 153, 33),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            modal_border: Color::Rgb(131, 165, 152), // aqua

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    ///
    /// An arctic, north-bluish color palette.
    pub fn nord() -> Self {
        Self {
            text: Color::Rgb(216, 222, 233),         // snow storm
            image: Color::Rgb(180, 142, 173),        // aurora purple
            block_border: Color::Rgb(76, 86, 106),   // polar night gray
            active_border: Color::Rgb(136, 192, 208), // frost cyan
            controls: Color::Rgb(235, 203, 139),     // aurora yellow

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(136, 192, 208),
            toolbar_bg: Color::Rgb(59, 66, 82),
            toolbar_fg: Color::Rgb(216, 222, 233),
            toggle_on: Color::Rgb(94, 129, 172), // frost blue
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),
            modal_border: Color::Rgb(136, 192, 208),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    ///
    /// A dark theme with vibrant purples and pinks.
    pub fn dracula() -> Self {
        Self {
            text: Color::Rgb(248, 248, 242),         // foreground
            image: Color::Rgb(255, 121, 198),        // pink
            block_border: Color::Rgb(98, 114, 164),  // comment
            active_border: Color::Rgb(189, 147, 249), // purple
            controls: Color::Rgb(241, 250, 140),     // yellow

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(189, 147, 249),
            toolbar_bg: Color::Rgb(68, 71, 90),
            toolbar_fg: Color::Rgb(248, 248, 242),
            toggle_on: Color::Rgb(189, 147, 249),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),
            modal_border: Color::Rgb(139, 233, 253), // cyan

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }

    /// Returns the Solarized Dark color scheme.
    pub fn solarized_dark() -> Self {
        Self {
            text: Color::Rgb(147, 161, 161),        // base1
            image: Color::Rgb(211, 54, 130),        // magenta
            block_border: Color::Rgb(88, 110, 117), // base01
            active_border: Color::Rgb(38, 139, 210), // blue
            controls: Color::Rgb(181, 137, 0),      // yellow

            background: Color::Rgb(0, 43, 54),
            foreground: Color::Rgb(131, 148, 150),
            cursor: Color::Rgb(38, 139, 210),
            toolbar_bg: Color::Rgb(7, 54, 66),
            toolbar_fg: Color::Rgb(147, 161, 161),
            toggle_on: Color::Rgb(42, 161, 152), // cyan
            status_line_bg: Color::Rgb(7, 54, 66),
            status_line_fg: Color::Rgb(147, 161, 161),
            modal_border: Color::Rgb(38, 139, 210),

            error: Color::Rgb(220, 50, 47),
            warning: Color::Rgb(181, 137, 0),
            info: Color::Rgb(38, 139, 210),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_and_dark_differ() {
        assert_ne!(
            ThemeColors::default_dark().background,
            ThemeColors::default_light().background
        );
    }

    #[test]
    fn test_active_border_stands_out() {
        for colors in [
            ThemeColors::default_dark(),
            ThemeColors::default_light(),
            ThemeColors::gruvbox_dark(),
            ThemeColors::nord(),
            ThemeColors::dracula(),
            ThemeColors::solarized_dark(),
        ] {
            assert_ne!(colors.active_border, colors.block_border);
        }
    }
}
