//! Image file selection.
//!
//! The editor asks for an image by path. [`ImageSelector`] validates and reads
//! the file on a worker thread and reports back over a channel with the
//! [`SelectionTicket`] it was given, so the editor can match the outcome to the
//! session that asked for it.
//!
//! [`load_image`] does the actual work synchronously and is usable on its own.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use thiserror::Error;

use crate::config::Config;
use crate::document::block::ImageHandle;
use crate::editor::session::SelectionTicket;

/// Why an image could not be selected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no file given")]
    EmptyPath,

    #[error("{0}: not a supported image type")]
    UnsupportedType(String),

    #[error("{0}: not a regular file")]
    NotAFile(String),

    #[error("{0}: file is empty")]
    EmptyFile(String),

    #[error("{path}: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[error("{path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Result of one selection request.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub ticket: SelectionTicket,
    pub result: Result<ImageHandle, SelectionError>,
}

/// Constraints applied to selected files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRules {
    pub extensions: Vec<String>,
    pub max_bytes: u64,
}

impl SelectionRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config.image_extensions.clone(),
            max_bytes: config.max_image_bytes,
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(input: &str) -> PathBuf {
    let input = input.trim();
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Validates and reads an image file.
///
/// # Errors
///
/// Returns a [`SelectionError`] if the path is empty, has an extension not in
/// `rules`, is not a regular file, is empty or too large, or cannot be read.
pub fn load_image(input: &str, rules: &SelectionRules) -> Result<ImageHandle, SelectionError> {
    if input.trim().is_empty() {
        return Err(SelectionError::EmptyPath);
    }

    let path = expand_path(input);
    let shown = path.display().to_string();

    if !rules.accepts(&path) {
        return Err(SelectionError::UnsupportedType(shown));
    }

    let metadata = fs::metadata(&path).map_err(|e| SelectionError::Unreadable {
        path: shown.clone(),
        reason: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(SelectionError::NotAFile(shown));
    }
    if metadata.len() == 0 {
        return Err(SelectionError::EmptyFile(shown));
    }
    if metadata.len() > rules.max_bytes {
        return Err(SelectionError::TooLarge {
            path: shown,
            size: metadata.len(),
            limit: rules.max_bytes,
        });
    }

    let bytes = fs::read(&path).map_err(|e| SelectionError::Unreadable {
        path: shown.clone(),
        reason: e.to_string(),
    })?;

    Ok(ImageHandle::new(path, bytes))
}

/// Loads images off the event loop and reports outcomes on a channel.
///
/// The channel's item type only needs to be constructible from a
/// [`SelectionOutcome`], which lets the event loop share one channel between
/// terminal input and selections.
pub struct ImageSelector<E> {
    sender: Sender<E>,
    rules: SelectionRules,
}

impl<E> ImageSelector<E>
where
    E: From<SelectionOutcome> + Send + 'static,
{
    pub fn new(sender: Sender<E>, rules: SelectionRules) -> Self {
        Self { sender, rules }
    }

    /// Starts loading `path`. The outcome is sent with `ticket` when done.
    pub fn select(&self, ticket: SelectionTicket, path: String) {
        let sender = self.sender.clone();
        let rules = self.rules.clone();

        tracing::debug!(%path, session = %ticket.session(), request = ticket.request(), "image selection started");

        thread::spawn(move || {
            let result = load_image(&path, &rules);
            match &result {
                Ok(handle) => tracing::debug!(%path, bytes = handle.len(), "image loaded"),
                Err(e) => tracing::warn!(%path, error = %e, "image selection failed"),
            }
            // The receiver is gone only when the editor is shutting down.
            let _ = sender.send(E::from(SelectionOutcome { ticket, result }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_valid_image() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pixel.png", &[0x89, b'P', b'N', b'G']);

        let handle = load_image(&path, &SelectionRules::default()).unwrap();
        assert_eq!(handle.len(), 4);
        assert_eq!(handle.file_name(), "pixel.png");
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "PHOTO.JPG", &[1, 2, 3]);
        assert!(load_image(&path, &SelectionRules::default()).is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(
            load_image("   ", &SelectionRules::default()),
            Err(SelectionError::EmptyPath)
        );
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", b"hello");
        assert!(matches!(
            load_image(&path, &SelectionRules::default()),
            Err(SelectionError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");
        assert!(matches!(
            load_image(&path.to_string_lossy(), &SelectionRules::default()),
            Err(SelectionError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blank.gif", &[]);
        assert!(matches!(
            load_image(&path, &SelectionRules::default()),
            Err(SelectionError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_size_limit() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "big.png", &[0u8; 32]);
        let rules = SelectionRules {
            extensions: vec!["png".to_string()],
            max_bytes: 16,
        };
        assert!(matches!(
            load_image(&path, &rules),
            Err(SelectionError::TooLarge { size: 32, limit: 16, .. })
        ));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("album.png");
        fs::create_dir(&sub).unwrap();
        assert!(matches!(
            load_image(&sub.to_string_lossy(), &SelectionRules::default()),
            Err(SelectionError::NotAFile(_))
        ));
    }

    #[test]
    fn test_expand_plain_path_unchanged() {
        assert_eq!(expand_path(" /tmp/a.png "), PathBuf::from("/tmp/a.png"));
    }
}
