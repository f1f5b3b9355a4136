//! Block types for the block document model.
//!
//! A [`Block`] is one content unit in the document: either a run of text or a
//! reference to an image selected by the user. Blocks carry a stable
//! [`BlockId`] that survives edits in place, while their display order is
//! purely positional.
//!
//! # Example
//!
//! ```
//! use blockquill::document::block::{Block, BlockContent, BlockId, BlockKind};
//!
//! let block = Block::new(BlockId::new(1), BlockContent::Text("Hello".to_string()));
//! assert_eq!(block.kind(), BlockKind::Text);
//! assert_eq!(block.text(), Some("Hello"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stable identifier of a block within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl BlockId {
    /// Wraps a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of a block, used by the edit session to pick an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
    /// Free-form text.
    #[default]
    Text,
    /// An image chosen through the file selector.
    Image,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Text => write!(f, "Text"),
            BlockKind::Image => write!(f, "Image"),
        }
    }
}

/// Opaque handle to user-selected image data.
///
/// The editor never decodes the bytes. It keeps them alongside the path they
/// were read from so the display layer can describe the image.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageHandle {
    source: PathBuf,
    bytes: Arc<[u8]>,
}

impl ImageHandle {
    /// Creates a handle from the path the image was selected from and its bytes.
    pub fn new(source: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            source: source.into(),
            bytes: bytes.into(),
        }
    }

    /// Path the image was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name component of the source path, or the full path when it has none.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the image data in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the handle carries no data.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bytes are elided, they can be megabytes long.
        f.debug_struct("ImageHandle")
            .field("source", &self.source)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Content carried by a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// Text, stored verbatim (no trimming).
    Text(String),
    /// Image data selected by the user.
    Image(ImageHandle),
}

impl BlockContent {
    /// Returns the kind matching this content.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Image(_) => BlockKind::Image,
        }
    }
}

/// A single content unit of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    content: BlockContent,
}

impl Block {
    /// Creates a block with the given identifier and content.
    pub fn new(id: BlockId, content: BlockContent) -> Self {
        Self { id, content }
    }

    /// The block's stable identifier.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// The block's kind, derived from its content.
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// The block's content.
    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    /// Text of a text block, `None` for images.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(text) => Some(text),
            BlockContent::Image(_) => None,
        }
    }

    /// Image handle of an image block, `None` for text.
    pub fn image(&self) -> Option<&ImageHandle> {
        match &self.content {
            BlockContent::Image(handle) => Some(handle),
            BlockContent::Text(_) => None,
        }
    }

    pub(crate) fn set_content(&mut self, content: BlockContent) {
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_content() {
        let text = Block::new(BlockId::new(1), BlockContent::Text("x".to_string()));
        let image = Block::new(
            BlockId::new(2),
            BlockContent::Image(ImageHandle::new("cat.png", vec![1u8, 2, 3])),
        );

        assert_eq!(text.kind(), BlockKind::Text);
        assert_eq!(image.kind(), BlockKind::Image);
        assert!(text.image().is_none());
        assert!(image.text().is_none());
    }

    #[test]
    fn test_image_handle_file_name() {
        let handle = ImageHandle::new("/tmp/pictures/cat.png", vec![0u8; 16]);
        assert_eq!(handle.file_name(), "cat.png");
        assert_eq!(handle.len(), 16);
        assert!(!handle.is_empty());
    }

    #[test]
    fn test_image_handle_debug_elides_bytes() {
        let handle = ImageHandle::new("cat.png", vec![7u8; 4]);
        let debug = format!("{:?}", handle);
        assert!(debug.contains("len: 4"));
        assert!(!debug.contains("7, 7"));
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(BlockId::new(42).to_string(), "#42");
    }
}
