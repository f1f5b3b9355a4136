//! Errors reported by the block-list controller.

use thiserror::Error;

use crate::file::picker::SelectionError;

/// Reasons a controller operation was rejected.
///
/// None of these leave the editor in a broken state: a rejected operation
/// changes nothing, and the user can retry or cancel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Please enter content for the block")]
    MissingContent,

    #[error("Please select an image for the block")]
    ImageSelectionRequired,

    #[error("No block at index {0}")]
    InvalidIndex(usize),

    #[error("No edit session is open")]
    NoSession,

    #[error("The draft is not a text block")]
    NotTextDraft,

    #[error("The draft is not an image block")]
    NotImageDraft,

    #[error("Block kind cannot be changed while editing an image")]
    KindLocked,

    #[error("The block being edited no longer exists")]
    EditTargetGone,

    #[error("Image selection belongs to a closed session")]
    StaleSelection,

    #[error("Image upload failed: {0}")]
    SelectionFailed(#[from] SelectionError),
}
