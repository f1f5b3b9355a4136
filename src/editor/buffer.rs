//! Single text buffer with a cursor, used for drafts and the image path prompt.
//!
//! The cursor is a byte offset that always sits on a character boundary, so
//! multi-byte UTF-8 input is handled correctly.

/// An editable string with a cursor.
///
/// # Example
///
/// ```
/// use blockquill::editor::buffer::EditBuffer;
///
/// let mut buf = EditBuffer::new();
/// buf.insert_char('h');
/// buf.insert_char('i');
/// buf.move_left();
/// buf.insert_char('é');
/// assert_eq!(buf.text(), "héi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into `text()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the content verbatim and moves the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8(); // Advance by byte length, not 1
    }

    /// Inserts a string at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Removes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.remove(start);
            self.cursor = start;
        }
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = match self.text[self.cursor..].char_indices().nth(1) {
                Some((next, _)) => self.cursor + next,
                None => self.text.len(),
            };
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Deletes everything from the cursor to the end (Ctrl-k).
    pub fn kill_to_end(&mut self) {
        self.text.truncate(self.cursor);
    }

    fn prev_boundary(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
