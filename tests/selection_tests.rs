use std::fs;
use std::sync::mpsc;
use std::time::Duration;

use blockquill::document::block::BlockKind;
use blockquill::editor::error::EditorError;
use blockquill::editor::state::EditorState;
use blockquill::file::picker::{
    load_image, ImageSelector, SelectionError, SelectionOutcome, SelectionRules,
};
use tempfile::TempDir;

const TIMEOUT: Duration = Duration::from_secs(5);

fn write_image(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, [0x47, 0x49, 0x46, 0x38, 0x39, 0x61]).unwrap();
    path.display().to_string()
}

fn image_session(state: &mut EditorState, path: &str) {
    state.open_create_session();
    state.set_draft_kind(BlockKind::Image).unwrap();
    state.set_image_path(path).unwrap();
}

#[test]
fn test_selector_reports_loaded_image() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "dog.gif");

    let (tx, rx) = mpsc::channel::<SelectionOutcome>();
    let selector = ImageSelector::new(tx, SelectionRules::default());

    let mut state = EditorState::new_with_default_theme();
    image_session(&mut state, &path);
    let (ticket, path) = state.begin_image_selection().unwrap();
    selector.select(ticket, path);

    let outcome = rx.recv_timeout(TIMEOUT).unwrap();
    assert_eq!(outcome.ticket, ticket);
    let handle = outcome.result.clone().unwrap();
    assert_eq!(handle.len(), 6);
    assert_eq!(handle.bytes(), &[0x47, 0x49, 0x46, 0x38, 0x39, 0x61]);

    state
        .commit_image_selection(outcome.ticket, outcome.result)
        .unwrap();
    assert_eq!(state.blocks()[0].image().unwrap().file_name(), "dog.gif");
}

#[test]
fn test_selector_reports_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png").display().to_string();

    let (tx, rx) = mpsc::channel::<SelectionOutcome>();
    let selector = ImageSelector::new(tx, SelectionRules::default());

    let mut state = EditorState::new_with_default_theme();
    image_session(&mut state, &missing);
    let (ticket, path) = state.begin_image_selection().unwrap();
    selector.select(ticket, path);

    let outcome = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(
        outcome.result,
        Err(SelectionError::Unreadable { .. })
    ));

    let err = state
        .commit_image_selection(outcome.ticket, outcome.result)
        .unwrap_err();
    assert!(matches!(err, EditorError::SelectionFailed(_)));
    assert!(state.session().is_some());
}

#[test]
fn test_late_outcome_after_cancel_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "late.png");

    let (tx, rx) = mpsc::channel::<SelectionOutcome>();
    let selector = ImageSelector::new(tx, SelectionRules::default());

    let mut state = EditorState::new_with_default_theme();
    image_session(&mut state, &path);
    let (ticket, path) = state.begin_image_selection().unwrap();
    selector.select(ticket, path);
    state.cancel_session();

    let outcome = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(outcome.result.is_ok());
    assert_eq!(
        state.commit_image_selection(outcome.ticket, outcome.result),
        Err(EditorError::StaleSelection)
    );
    assert!(state.document().is_empty());
}

#[test]
fn test_rules_from_custom_limits() {
    let dir = TempDir::new().unwrap();
    let path = write_image(&dir, "big.png");
    let rules = SelectionRules {
        extensions: vec!["png".to_string()],
        max_bytes: 4,
    };

    assert!(matches!(
        load_image(&path, &rules),
        Err(SelectionError::TooLarge {
            size: 6,
            limit: 4,
            ..
        })
    ));

    let gif = write_image(&dir, "small.gif");
    assert!(matches!(
        load_image(&gif, &rules),
        Err(SelectionError::UnsupportedType(_))
    ));
}
