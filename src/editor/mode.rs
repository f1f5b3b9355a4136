//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents how keystrokes
//! are interpreted. The mode is derived from the edit session: with no
//! session open the editor is in Normal mode; with a session open it is in
//! Compose mode for text drafts or ImagePath mode for image drafts.
//!
//! # Modes
//!
//! - **Normal**: Navigate blocks, toggle formatting, add/edit/delete
//! - **Compose**: Type the text of a block in the modal
//! - **ImagePath**: Type the path of an image file in the modal
//!
//! # Example
//!
//! ```
//! use blockquill::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The mode is displayed in the status bar using the `Display` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Block navigation and document commands.
    #[default]
    Normal,
    /// Modal open with a text draft.
    Compose,
    /// Modal open with an image draft.
    ImagePath,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for display in the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Compose => write!(f, "COMPOSE"),
            EditorMode::ImagePath => write!(f, "IMAGE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EditorMode::Compose.to_string(), "COMPOSE");
        assert_eq!(EditorMode::ImagePath.to_string(), "IMAGE");
    }
}
