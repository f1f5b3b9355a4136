//! Editor state and mode management.
//!
//! This module provides the block-list controller: the document being edited,
//! the add/edit modal session, the global formatting flags and the active
//! block. Keystrokes are interpreted according to the current
//! [`mode::EditorMode`], which follows the session.
//!
//! # Modules
//!
//! - `buffer`: Editable text with a cursor
//! - `error`: Errors returned by controller operations
//! - `format`: Bold/italic/underline flags
//! - `mode`: Editor mode enumeration
//! - `session`: Add/edit modal session
//! - `state`: The controller itself
//!
//! # Example
//!
//! ```
//! use blockquill::editor::mode::EditorMode;
//! use blockquill::editor::state::EditorState;
//!
//! let mut state = EditorState::new_with_default_theme();
//! assert_eq!(state.mode(), EditorMode::Normal);
//!
//! state.open_create_session();
//! assert_eq!(state.mode(), EditorMode::Compose);
//! ```

pub mod buffer;
pub mod error;
pub mod format;
pub mod mode;
pub mod session;
pub mod state;
