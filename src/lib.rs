//! BlockQuill - a terminal-based block document editor.
//!
//! Documents are vertical lists of text and image blocks. Blocks are added
//! and edited through a modal, removed with a keystroke, and every text block
//! is displayed with the same bold/italic/underline toggles.
//!
//! The crate is organized as:
//!
//! - [`document`]: Blocks and the ordered document
//! - [`editor`]: The block-list controller and its edit session
//! - [`file`]: Image file selection
//! - [`input`]: Key mapping and event handling
//! - [`ui`] and [`theme`]: Terminal rendering
//! - [`config`]: User configuration

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod input;
pub mod theme;
pub mod ui;
