//! Editor state management.
//!
//! This module provides the `EditorState` struct, the block-list controller.
//! It owns the block document, the add/edit modal session, the global
//! formatting flags, the active (hovered) block and the message shown to the
//! user, and it is the only place the document is mutated.
//!
//! # State Components
//!
//! - **Document**: The ordered list of blocks
//! - **Session**: The open add/edit modal, if any
//! - **Format flags**: Bold/italic/underline applied to every text block
//! - **Active index**: The block showing its edit/delete controls
//! - **Message**: Feedback for the last operation
//!
//! The active index and the session are independent. Opening an edit session
//! binds the session to the block's id, so moving the active block afterwards
//! does not change which block is being edited.
//!
//! # Example
//!
//! ```
//! use blockquill::editor::state::EditorState;
//!
//! let mut state = EditorState::new_with_default_theme();
//!
//! state.open_create_session();
//! state.set_draft_text("Hello").unwrap();
//! state.commit_session().unwrap();
//!
//! assert_eq!(state.document().len(), 1);
//! assert!(state.session().is_none());
//! ```

use ratatui::layout::Rect;

use super::error::EditorError;
use super::format::FormatFlags;
use super::mode::EditorMode;
use super::session::{EditSession, SelectionTicket, SessionId, SessionMode};
use crate::config::{Config, ImageCommitPolicy};
use crate::document::block::{Block, BlockContent, BlockKind, ImageHandle};
use crate::document::Document;
use crate::file::picker::SelectionError;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Rows used by an image block, borders included.
const IMAGE_BLOCK_HEIGHT: u16 = 4;

/// Largest number of text rows a text block may show.
pub const MAX_TEXT_BLOCK_ROWS: u16 = 200;

/// Cursor blink half-period in event-loop ticks.
const CURSOR_BLINK_TICKS: u8 = 5;

/// Manages the complete runtime state of the editor.
///
/// # Examples
///
/// ```
/// use blockquill::editor::state::EditorState;
/// use blockquill::editor::mode::EditorMode;
///
/// let state = EditorState::new_with_default_theme();
///
/// assert_eq!(state.mode(), EditorMode::Normal);
/// assert!(state.document().is_empty());
/// assert_eq!(state.active_index(), None);
/// ```
pub struct EditorState {
    document: Document,
    session: Option<EditSession>,
    format: FormatFlags,
    active: Option<usize>,
    message: Option<Message>,
    next_session: u64,
    image_commit: ImageCommitPolicy,
    current_theme: String,
    show_help: bool,
    help_scroll: usize,
    enable_mouse: bool,
    show_block_numbers: bool,
    text_block_rows: u16,
    scroll_offset: usize,
    block_areas: Vec<(usize, Rect)>,
    cursor_visible: bool,
    cursor_blink_ticks: u8,
}

impl EditorState {
    /// Creates an editor with an empty document and the given theme name.
    pub fn new(initial_theme_name: String) -> Self {
        let defaults = Config::default();
        Self {
            document: Document::new(),
            session: None,
            format: FormatFlags::default(),
            active: None,
            message: None,
            next_session: 0,
            image_commit: defaults.image_commit,
            current_theme: initial_theme_name,
            show_help: false,
            help_scroll: 0,
            enable_mouse: defaults.enable_mouse,
            show_block_numbers: defaults.show_block_numbers,
            text_block_rows: defaults.text_block_rows,
            scroll_offset: 0,
            block_areas: Vec::new(),
            cursor_visible: true,
            cursor_blink_ticks: 0,
        }
    }

    /// Creates an editor using the "default-dark" theme.
    pub fn new_with_default_theme() -> Self {
        Self::new("default-dark".to_string())
    }

    /// Creates an editor with settings taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(config.theme.clone());
        state.image_commit = config.image_commit;
        state.enable_mouse = config.enable_mouse;
        state.show_block_numbers = config.show_block_numbers;
        state.text_block_rows = config.text_block_rows.clamp(1, MAX_TEXT_BLOCK_ROWS);
        state
    }

    // ----- Document ---------------------------------------------------------

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Blocks in display order.
    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    /// Removes the block at `index`. Later blocks shift down by one.
    ///
    /// The active index stays on the same position, clamped to the new end
    /// of the document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if `index` is out of range.
    pub fn delete_block(&mut self, index: usize) -> Result<Block, EditorError> {
        let removed = self
            .document
            .remove(index)
            .ok_or(EditorError::InvalidIndex(index))?;

        tracing::info!(index, id = %removed.id(), kind = %removed.kind(), "block deleted");

        let len = self.document.len();
        self.active = match self.active {
            Some(_) if len == 0 => None,
            Some(active) if active >= len => Some(len - 1),
            other => other,
        };
        if self.scroll_offset >= len {
            self.scroll_offset = len.saturating_sub(1);
        }

        Ok(removed)
    }

    // ----- Sessions ---------------------------------------------------------

    /// The open session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Returns the current mode, derived from the session.
    pub fn mode(&self) -> EditorMode {
        match &self.session {
            None => EditorMode::Normal,
            Some(session) => match session.draft_kind() {
                BlockKind::Text => EditorMode::Compose,
                BlockKind::Image => EditorMode::ImagePath,
            },
        }
    }

    /// Current position of the block being edited, if the session edits one.
    pub fn session_index(&self) -> Option<usize> {
        match self.session.as_ref()?.mode() {
            SessionMode::Creating => None,
            SessionMode::EditingExisting { id } => self.document.position(id),
        }
    }

    /// Opens a session that will append a new block.
    ///
    /// The draft starts as empty text. Any session already open is discarded.
    pub fn open_create_session(&mut self) {
        let id = self.allocate_session_id();
        tracing::debug!(session = %id, "create session opened");
        self.session = Some(EditSession::creating(id));
        self.clear_message();
        self.reset_cursor_blink();
    }

    /// Opens a session editing the block at `index`, seeded from its content.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if `index` is out of range.
    pub fn open_edit_session(&mut self, index: usize) -> Result<(), EditorError> {
        let block = self
            .document
            .get(index)
            .ok_or(EditorError::InvalidIndex(index))?;
        let (block_id, kind) = (block.id(), block.kind());
        let text = block.text().unwrap_or_default().to_string();

        let id = self.allocate_session_id();
        tracing::debug!(session = %id, index, block = %block_id, "edit session opened");
        self.session = Some(EditSession::editing(id, block_id, kind, &text));
        self.clear_message();
        self.reset_cursor_blink();
        Ok(())
    }

    /// Sets the kind of block being drafted.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without an open session, or `KindLocked` when the
    /// session edits an image block.
    pub fn set_draft_kind(&mut self, kind: BlockKind) -> Result<(), EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoSession)?;
        if session.draft_kind() != kind && !session.can_switch_kind() {
            return Err(EditorError::KindLocked);
        }
        session.set_draft_kind(kind);
        self.reset_cursor_blink();
        Ok(())
    }

    /// Switches the draft between text and image, reporting a locked kind to the user.
    pub fn toggle_draft_kind(&mut self) {
        let next = match self.session.as_ref().map(|s| s.draft_kind()) {
            Some(BlockKind::Text) => BlockKind::Image,
            Some(BlockKind::Image) => BlockKind::Text,
            None => return,
        };
        if let Err(e) = self.set_draft_kind(next) {
            self.set_message(e.to_string(), MessageLevel::Warning);
        }
    }

    /// Replaces the draft text verbatim.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without an open session, or `NotTextDraft` when
    /// the draft kind is Image.
    pub fn set_draft_text(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoSession)?;
        if session.draft_kind() != BlockKind::Text {
            return Err(EditorError::NotTextDraft);
        }
        session.draft_mut().set_text(text);
        Ok(())
    }

    /// Replaces the image path typed in the modal.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without an open session, or `NotImageDraft` when
    /// the draft kind is Text.
    pub fn set_image_path(&mut self, path: impl Into<String>) -> Result<(), EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoSession)?;
        if session.draft_kind() != BlockKind::Image {
            return Err(EditorError::NotImageDraft);
        }
        session.image_path_mut().set_text(path);
        Ok(())
    }

    /// Commits the open session.
    ///
    /// A text draft must contain something other than whitespace. A creating
    /// session appends a block, an editing session replaces the edited block
    /// in place. On success the session closes and the format flags reset.
    ///
    /// Image drafts are committed by [`commit_image_selection`]; committing
    /// one here only succeeds when editing an image block without choosing a
    /// new image, which leaves the block as it was.
    ///
    /// On failure a warning is shown and the session stays open.
    ///
    /// [`commit_image_selection`]: EditorState::commit_image_selection
    pub fn commit_session(&mut self) -> Result<(), EditorError> {
        let session = self.session.as_ref().ok_or(EditorError::NoSession)?;
        let mode = session.mode();

        match session.draft_kind() {
            BlockKind::Text => {
                if session.draft_text().trim().is_empty() {
                    return Err(self.reject(EditorError::MissingContent));
                }
                let content = BlockContent::Text(session.draft_text().to_string());

                match mode {
                    SessionMode::Creating => {
                        let id = self.document.push(content);
                        tracing::info!(block = %id, index = self.document.len() - 1, "text block added");
                        self.set_message("Block added".to_string(), MessageLevel::Info);
                    }
                    SessionMode::EditingExisting { id } => {
                        let Some(index) = self.document.position(id) else {
                            return Err(self.reject(EditorError::EditTargetGone));
                        };
                        self.document.replace(index, content);
                        tracing::info!(block = %id, index, "text block updated");
                        self.set_message("Block updated".to_string(), MessageLevel::Info);
                    }
                }
            }
            BlockKind::Image => {
                let unchanged_image =
                    !session.is_creating() && session.target_kind() == Some(BlockKind::Image);
                if !unchanged_image {
                    return Err(self.reject(EditorError::ImageSelectionRequired));
                }
                tracing::debug!(session = %session.id(), "image edit closed without a new image");
            }
        }

        self.format.reset();
        self.close_session();
        Ok(())
    }

    /// Starts an image selection for the open session.
    ///
    /// Returns the ticket identifying the request and the path typed in the
    /// modal. A newer request supersedes an older one still in flight.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without an open session, or `NotImageDraft` when
    /// the draft kind is Text.
    pub fn begin_image_selection(&mut self) -> Result<(SelectionTicket, String), EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoSession)?;
        if session.draft_kind() != BlockKind::Image {
            return Err(EditorError::NotImageDraft);
        }
        let ticket = session.issue_ticket();
        let path = session.image_path().text().trim().to_string();
        self.set_message(format!("Loading {}...", path), MessageLevel::Info);
        Ok((ticket, path))
    }

    /// Applies the outcome of an image selection.
    ///
    /// The outcome is ignored unless `ticket` is the request pending in the
    /// current session, so results arriving after a cancel, a commit, a new
    /// session or a newer request change nothing.
    ///
    /// A successful selection appends an image block and closes the session.
    /// With [`ImageCommitPolicy::Replace`] an editing session replaces the
    /// edited block instead. A failed selection shows a warning and leaves
    /// the session open.
    ///
    /// # Errors
    ///
    /// Returns `StaleSelection` for outdated tickets and `SelectionFailed`
    /// when the selection reported an error.
    pub fn commit_image_selection(
        &mut self,
        ticket: SelectionTicket,
        result: Result<ImageHandle, SelectionError>,
    ) -> Result<(), EditorError> {
        let session = match self.session.as_mut() {
            Some(session) if session.pending() == Some(ticket) => session,
            _ => {
                tracing::debug!(
                    session = %ticket.session(),
                    request = ticket.request(),
                    "discarding stale image selection"
                );
                return Err(EditorError::StaleSelection);
            }
        };

        let handle = match result {
            Ok(handle) => handle,
            Err(e) => {
                session.clear_pending();
                return Err(self.reject(EditorError::SelectionFailed(e)));
            }
        };

        let name = handle.file_name();
        let content = BlockContent::Image(handle);
        let replace_target = match (session.mode(), self.image_commit) {
            (SessionMode::EditingExisting { id }, ImageCommitPolicy::Replace) => {
                self.document.position(id)
            }
            _ => None,
        };

        match replace_target {
            Some(index) => {
                self.document.replace(index, content);
                tracing::info!(index, image = %name, "image block replaced");
                self.set_message(format!("Replaced block with {}", name), MessageLevel::Info);
            }
            None => {
                let id = self.document.push(content);
                tracing::info!(block = %id, image = %name, "image block added");
                self.set_message(format!("Added image {}", name), MessageLevel::Info);
            }
        }

        self.close_session();
        Ok(())
    }

    /// Closes the session without touching the document.
    pub fn cancel_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = %session.id(), "session cancelled");
        }
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = %session.id(), "session committed");
        }
    }

    fn allocate_session_id(&mut self) -> SessionId {
        self.next_session += 1;
        SessionId::new(self.next_session)
    }

    /// Reports a rejected commit to the user and hands the error back.
    fn reject(&mut self, error: EditorError) -> EditorError {
        tracing::warn!(error = %error, "commit rejected");
        self.set_message(error.to_string(), MessageLevel::Warning);
        error
    }

    // ----- Draft editing ----------------------------------------------------

    /// Inserts a character into the active draft buffer.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(session) = self.session.as_mut() {
            session.active_buffer_mut().insert_char(ch);
            self.reset_cursor_blink();
        }
    }

    /// Inserts a string into the active draft buffer.
    ///
    /// Image paths are single-line, so newlines are dropped there.
    pub fn insert_str(&mut self, s: &str) {
        if let Some(session) = self.session.as_mut() {
            match session.draft_kind() {
                BlockKind::Text => session.draft_mut().insert_str(s),
                BlockKind::Image => {
                    let line: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                    session.image_path_mut().insert_str(&line);
                }
            }
            self.reset_cursor_blink();
        }
    }

    /// Inserts a line break into a text draft.
    pub fn insert_newline(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.draft_kind() == BlockKind::Text {
                session.draft_mut().insert_char('\n');
                self.reset_cursor_blink();
            }
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        self.edit_active_buffer(|buf| buf.backspace());
    }

    /// Deletes the character under the cursor.
    pub fn delete_at_cursor(&mut self) {
        self.edit_active_buffer(|buf| buf.delete());
    }

    /// Moves the draft cursor one character left.
    pub fn cursor_left(&mut self) {
        self.edit_active_buffer(|buf| buf.move_left());
    }

    /// Moves the draft cursor one character right.
    pub fn cursor_right(&mut self) {
        self.edit_active_buffer(|buf| buf.move_right());
    }

    /// Moves the draft cursor to the start.
    pub fn cursor_home(&mut self) {
        self.edit_active_buffer(|buf| buf.move_home());
    }

    /// Moves the draft cursor to the end.
    pub fn cursor_end(&mut self) {
        self.edit_active_buffer(|buf| buf.move_end());
    }

    /// Deletes from the cursor to the end of the draft.
    pub fn kill_to_end(&mut self) {
        self.edit_active_buffer(|buf| buf.kill_to_end());
    }

    fn edit_active_buffer(&mut self, f: impl FnOnce(&mut super::buffer::EditBuffer)) {
        if let Some(session) = self.session.as_mut() {
            f(session.active_buffer_mut());
            self.reset_cursor_blink();
        }
    }

    // ----- Formatting -------------------------------------------------------

    /// The global format flags.
    pub fn format(&self) -> FormatFlags {
        self.format
    }

    /// Toggles bold display of every text block.
    pub fn toggle_bold(&mut self) {
        self.format.toggle_bold();
    }

    /// Toggles italic display of every text block.
    pub fn toggle_italic(&mut self) {
        self.format.toggle_italic();
    }

    /// Toggles underlined display of every text block.
    pub fn toggle_underline(&mut self) {
        self.format.toggle_underline();
    }

    // ----- Active block -----------------------------------------------------

    /// The block currently showing its controls.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Sets the active block. Out-of-range indices clear it.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.document.len());
    }

    /// The active block, if any.
    pub fn active_block(&self) -> Option<&Block> {
        self.active.and_then(|i| self.document.get(i))
    }

    /// Moves the active block down, starting at the first block.
    pub fn move_active_down(&mut self) {
        let len = self.document.len();
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves the active block up, starting at the last block.
    pub fn move_active_up(&mut self) {
        let len = self.document.len();
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        });
    }

    /// Makes the first block active.
    pub fn move_active_first(&mut self) {
        self.set_active_index(Some(0));
    }

    /// Makes the last block active.
    pub fn move_active_last(&mut self) {
        self.set_active_index(self.document.len().checked_sub(1));
    }

    /// Opens an edit session for the active block, telling the user if there is none.
    pub fn edit_active(&mut self) {
        match self.active {
            Some(index) => {
                if let Err(e) = self.open_edit_session(index) {
                    self.set_message(e.to_string(), MessageLevel::Error);
                }
            }
            None => self.set_message("No block selected".to_string(), MessageLevel::Warning),
        }
    }

    /// Deletes the active block, telling the user if there is none.
    pub fn delete_active(&mut self) {
        match self.active {
            Some(index) => match self.delete_block(index) {
                Ok(_) => self.set_message("Block deleted".to_string(), MessageLevel::Info),
                Err(e) => self.set_message(e.to_string(), MessageLevel::Error),
            },
            None => self.set_message("No block selected".to_string(), MessageLevel::Warning),
        }
    }

    // ----- Layout -----------------------------------------------------------

    /// Rows a block occupies in the document view, borders included.
    pub fn block_height(&self, block: &Block) -> u16 {
        match block.kind() {
            BlockKind::Text => self.text_block_rows.saturating_add(2),
            BlockKind::Image => IMAGE_BLOCK_HEIGHT,
        }
    }

    /// Index of the first block drawn in the document view.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts the scroll offset so the active block is fully visible.
    pub fn adjust_scroll_to_active(&mut self, viewport_height: u16) {
        let len = self.document.len();
        if len == 0 {
            self.scroll_offset = 0;
            return;
        }
        self.scroll_offset = self.scroll_offset.min(len - 1);

        let Some(active) = self.active else {
            return;
        };
        if active < self.scroll_offset {
            self.scroll_offset = active;
            return;
        }

        let blocks = self.document.blocks();
        let mut used: u32 = blocks[self.scroll_offset..=active]
            .iter()
            .map(|b| u32::from(self.block_height(b)))
            .sum();
        while self.scroll_offset < active && used > u32::from(viewport_height) {
            used -= u32::from(self.block_height(&blocks[self.scroll_offset]));
            self.scroll_offset += 1;
        }
    }

    /// Records where each visible block was drawn, for mouse hit testing.
    pub fn set_block_areas(&mut self, areas: Vec<(usize, Rect)>) {
        self.block_areas = areas;
    }

    /// Returns the block drawn at the given screen cell (0-based).
    pub fn block_at(&self, column: u16, row: u16) -> Option<usize> {
        self.block_areas
            .iter()
            .find(|(_, area)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(index, _)| *index)
    }

    // ----- Messages ---------------------------------------------------------

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    // ----- Settings and overlays --------------------------------------------

    /// Returns the name of the current theme.
    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// What an image selection does while editing a block.
    pub fn image_commit(&self) -> ImageCommitPolicy {
        self.image_commit
    }

    /// Sets what an image selection does while editing a block.
    pub fn set_image_commit(&mut self, policy: ImageCommitPolicy) {
        self.image_commit = policy;
    }

    /// Returns true if mouse clicks select blocks.
    pub fn enable_mouse(&self) -> bool {
        self.enable_mouse
    }

    /// Enables or disables mouse block selection.
    pub fn set_enable_mouse(&mut self, enabled: bool) {
        self.enable_mouse = enabled;
    }

    /// Returns true if block titles carry their position.
    pub fn show_block_numbers(&self) -> bool {
        self.show_block_numbers
    }

    /// Rows of text shown per text block.
    pub fn text_block_rows(&self) -> u16 {
        self.text_block_rows
    }

    /// Returns true if the help overlay is visible.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the help overlay, scrolled to the top.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll = 0;
    }

    /// Current scroll offset of the help overlay.
    pub fn help_scroll(&self) -> usize {
        self.help_scroll
    }

    /// Scrolls the help overlay up by one line.
    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    /// Scrolls the help overlay down, stopping at its last line.
    pub fn scroll_help_down(&mut self, line_count: usize) {
        self.help_scroll = self
            .help_scroll
            .saturating_add(1)
            .min(line_count.saturating_sub(1));
    }

    // ----- Cursor blink -----------------------------------------------------

    /// Returns true if the blinking cursor is currently drawn.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Advances the blink timer; called once per event-loop tick.
    pub fn update_cursor_blink(&mut self) {
        self.cursor_blink_ticks += 1;
        if self.cursor_blink_ticks >= CURSOR_BLINK_TICKS {
            self.cursor_blink_ticks = 0;
            self.cursor_visible = !self.cursor_visible;
        }
    }

    /// Shows the cursor and restarts the blink timer, so typing never hides it.
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.cursor_blink_ticks = 0;
    }
}
