//! Block document model.
//!
//! A [`Document`] is an ordered list of [`Block`]s where insertion order is
//! display order. It is mutated only by three operations: append, replace at
//! an index, and remove at an index. Nothing reorders existing blocks.
//!
//! # Example
//!
//! ```
//! use blockquill::document::Document;
//! use blockquill::document::block::BlockContent;
//!
//! let mut doc = Document::new();
//! doc.push(BlockContent::Text("A".to_string()));
//! doc.push(BlockContent::Text("B".to_string()));
//! doc.remove(0).unwrap();
//!
//! assert_eq!(doc.len(), 1);
//! assert_eq!(doc.get(0).and_then(|b| b.text()), Some("B"));
//! ```

pub mod block;

use block::{Block, BlockContent, BlockId};

/// Ordered sequence of blocks.
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
    next_id: u64,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the document holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks in display order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over blocks in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Returns the block at `index`.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Returns the current position of the block with the given id.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    /// Appends a block and returns its new id.
    pub fn push(&mut self, content: BlockContent) -> BlockId {
        let id = self.allocate_id();
        self.blocks.push(Block::new(id, content));
        id
    }

    /// Replaces the content of the block at `index`, keeping its id.
    ///
    /// Returns the previous content, or `None` if `index` is out of range.
    pub fn replace(&mut self, index: usize, content: BlockContent) -> Option<BlockContent> {
        let block = self.blocks.get_mut(index)?;
        let previous = block.content().clone();
        block.set_content(content);
        Some(previous)
    }

    /// Removes the block at `index`. Later blocks shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }

    fn allocate_id(&mut self) -> BlockId {
        self.next_id += 1;
        BlockId::new(self.next_id)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
