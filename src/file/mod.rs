//! File access for the editor.
//!
//! The editor keeps no documents on disk. The only file access is reading
//! images the user selects, handled by [`picker`].

pub mod picker;
