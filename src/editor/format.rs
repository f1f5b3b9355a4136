//! Process-wide text formatting flags.
//!
//! The flags apply to the display of every text block at once. They are not
//! stored with block content and are reset whenever an edit session commits.

/// Bold, italic and underline toggles.
///
/// # Example
///
/// ```
/// use blockquill::editor::format::FormatFlags;
///
/// let mut flags = FormatFlags::default();
/// flags.toggle_bold();
/// assert!(flags.bold);
/// flags.reset();
/// assert!(flags.is_plain());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FormatFlags {
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
    }

    /// Clears all three flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no flag is set.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.underline
    }
}
