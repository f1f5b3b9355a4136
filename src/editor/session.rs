//! Edit session state for the add/edit modal.
//!
//! A session is the transient state of one modal interaction: whether it
//! creates a new block or edits an existing one, the kind being drafted, the
//! draft text and the image path prompt. Sessions are identified by a
//! [`SessionId`] so that an image selection finishing after the session
//! closed can be recognised and dropped.

use std::fmt;

use super::buffer::EditBuffer;
use crate::document::block::{BlockId, BlockKind};

/// Identifier of one edit session, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Tags an in-flight image selection with the session and request it belongs to.
///
/// A newer request in the same session supersedes older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionTicket {
    session: SessionId,
    request: u64,
}

impl SelectionTicket {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn request(&self) -> u64 {
        self.request
    }
}

/// What the session will do on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Append a new block.
    Creating,
    /// Replace the content of an existing block.
    EditingExisting { id: BlockId },
}

/// Transient state of an open add/edit modal.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: SessionId,
    mode: SessionMode,
    /// Kind of the block being edited; `None` when creating.
    target_kind: Option<BlockKind>,
    draft_kind: BlockKind,
    draft: EditBuffer,
    image_path: EditBuffer,
    pending: Option<SelectionTicket>,
    requests: u64,
}

impl EditSession {
    /// Opens a session that will append a new block. Starts as an empty text draft.
    pub fn creating(id: SessionId) -> Self {
        Self {
            id,
            mode: SessionMode::Creating,
            target_kind: None,
            draft_kind: BlockKind::Text,
            draft: EditBuffer::new(),
            image_path: EditBuffer::new(),
            pending: None,
            requests: 0,
        }
    }

    /// Opens a session seeded from an existing block.
    pub fn editing(id: SessionId, block: BlockId, kind: BlockKind, text: &str) -> Self {
        Self {
            id,
            mode: SessionMode::EditingExisting { id: block },
            target_kind: Some(kind),
            draft_kind: kind,
            draft: EditBuffer::with_text(text),
            image_path: EditBuffer::new(),
            pending: None,
            requests: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.mode, SessionMode::Creating)
    }

    /// Kind of the block under edit, `None` for a creating session.
    pub fn target_kind(&self) -> Option<BlockKind> {
        self.target_kind
    }

    pub fn draft_kind(&self) -> BlockKind {
        self.draft_kind
    }

    /// Kind can be switched when creating or when editing a text block.
    pub fn can_switch_kind(&self) -> bool {
        self.target_kind != Some(BlockKind::Image)
    }

    pub(crate) fn set_draft_kind(&mut self, kind: BlockKind) {
        if self.draft_kind != kind {
            // Switching away abandons any selection in flight.
            self.pending = None;
        }
        self.draft_kind = kind;
    }

    pub fn draft_text(&self) -> &str {
        self.draft.text()
    }

    pub fn draft(&self) -> &EditBuffer {
        &self.draft
    }

    pub(crate) fn draft_mut(&mut self) -> &mut EditBuffer {
        &mut self.draft
    }

    pub fn image_path(&self) -> &EditBuffer {
        &self.image_path
    }

    pub(crate) fn image_path_mut(&mut self) -> &mut EditBuffer {
        &mut self.image_path
    }

    /// Buffer that receives typed input for the current draft kind.
    pub(crate) fn active_buffer_mut(&mut self) -> &mut EditBuffer {
        match self.draft_kind {
            BlockKind::Text => &mut self.draft,
            BlockKind::Image => &mut self.image_path,
        }
    }

    /// Ticket of the image selection in flight, if any.
    pub fn pending(&self) -> Option<SelectionTicket> {
        self.pending
    }

    /// Starts a new selection request, superseding any earlier one.
    pub(crate) fn issue_ticket(&mut self) -> SelectionTicket {
        self.requests += 1;
        let ticket = SelectionTicket {
            session: self.id,
            request: self.requests,
        };
        self.pending = Some(ticket);
        ticket
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }
}
