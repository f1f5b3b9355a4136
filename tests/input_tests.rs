use std::fs;
use std::sync::mpsc;
use std::time::Duration;

use blockquill::editor::mode::EditorMode;
use blockquill::editor::state::{EditorState, MessageLevel};
use blockquill::file::picker::SelectionRules;
use blockquill::input::keys::{map_key_event, InputEvent};
use blockquill::input::{AppEvent, InputHandler};
use ratatui::layout::Rect;
use tempfile::TempDir;
use termion::event::{Event, Key, MouseButton, MouseEvent};

fn handler() -> InputHandler {
    let (tx, rx) = mpsc::channel();
    InputHandler::with_channel(tx, rx, SelectionRules::default())
}

fn press(handler: &mut InputHandler, state: &mut EditorState, key: Key) -> bool {
    handler.handle_event(Event::Key(key), state).unwrap()
}

fn type_str(handler: &mut InputHandler, state: &mut EditorState, text: &str) {
    for c in text.chars() {
        press(handler, state, Key::Char(c));
    }
}

fn click(handler: &mut InputHandler, state: &mut EditorState, x: u16, y: u16) {
    let event = Event::Mouse(MouseEvent::Press(MouseButton::Left, x, y));
    handler.handle_event(event, state).unwrap();
}

/// Waits for the next selection outcome and applies it.
fn finish_selection(handler: &mut InputHandler, state: &mut EditorState) {
    let event = handler
        .poll_event(Duration::from_secs(5))
        .unwrap()
        .expect("selection outcome");
    assert!(matches!(event, AppEvent::Selection(_)));
    handler.handle_app_event(event, state).unwrap();
}

#[test]
fn test_normal_mode_keys() {
    let cases = [
        (Key::Char('a'), InputEvent::AddBlock),
        (Key::Char('e'), InputEvent::EditBlock),
        (Key::Char('d'), InputEvent::DeleteBlock),
        (Key::Char('b'), InputEvent::ToggleBold),
        (Key::Char('i'), InputEvent::ToggleItalic),
        (Key::Char('u'), InputEvent::ToggleUnderline),
        (Key::Esc, InputEvent::ClearActive),
    ];
    for (key, expected) in cases {
        assert_eq!(map_key_event(Event::Key(key), &EditorMode::Normal), expected);
    }
}

#[test]
fn test_modal_keys_insert_text() {
    assert_eq!(
        map_key_event(Event::Key(Key::Char('b')), &EditorMode::Compose),
        InputEvent::InsertCharacter('b')
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Char('\t')), &EditorMode::ImagePath),
        InputEvent::SwitchKind
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Esc), &EditorMode::ImagePath),
        InputEvent::Cancel
    );
}

#[test]
fn test_add_text_block_by_keys() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    assert_eq!(state.mode(), EditorMode::Compose);

    type_str(&mut handler, &mut state, "Hello");
    press(&mut handler, &mut state, Key::Ctrl('n'));
    type_str(&mut handler, &mut state, "world");
    press(&mut handler, &mut state, Key::Char('\n'));

    assert_eq!(state.mode(), EditorMode::Normal);
    assert_eq!(state.blocks()[0].text(), Some("Hello\nworld"));
}

#[test]
fn test_empty_commit_keeps_modal_open() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    press(&mut handler, &mut state, Key::Char('\n'));

    assert_eq!(state.mode(), EditorMode::Compose);
    assert_eq!(state.message().unwrap().level, MessageLevel::Warning);
}

#[test]
fn test_escape_cancels_modal() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    type_str(&mut handler, &mut state, "draft");
    press(&mut handler, &mut state, Key::Esc);

    assert_eq!(state.mode(), EditorMode::Normal);
    assert!(state.document().is_empty());
}

#[test]
fn test_quit_only_in_normal_mode() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    assert!(!press(&mut handler, &mut state, Key::Char('q')));
    assert_eq!(state.session().unwrap().draft_text(), "q");

    press(&mut handler, &mut state, Key::Esc);
    assert!(press(&mut handler, &mut state, Key::Char('q')));
}

#[test]
fn test_edit_and_delete_active_block() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();
    for text in ["A", "B"] {
        press(&mut handler, &mut state, Key::Char('a'));
        type_str(&mut handler, &mut state, text);
        press(&mut handler, &mut state, Key::Char('\n'));
    }

    // Nothing active yet
    press(&mut handler, &mut state, Key::Char('d'));
    assert_eq!(state.document().len(), 2);

    press(&mut handler, &mut state, Key::Char('j'));
    assert_eq!(state.active_index(), Some(0));
    press(&mut handler, &mut state, Key::Char('e'));
    press(&mut handler, &mut state, Key::Backspace);
    type_str(&mut handler, &mut state, "a");
    press(&mut handler, &mut state, Key::Char('\n'));
    assert_eq!(state.blocks()[0].text(), Some("a"));

    press(&mut handler, &mut state, Key::Char('d'));
    assert_eq!(state.document().len(), 1);
    assert_eq!(state.active_block().unwrap().text(), Some("B"));
}

#[test]
fn test_format_keys_toggle_flags() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('b'));
    press(&mut handler, &mut state, Key::Char('u'));
    assert!(state.format().bold);
    assert!(state.format().underline);
    assert!(!state.format().italic);

    press(&mut handler, &mut state, Key::Char('b'));
    assert!(!state.format().bold);
}

#[test]
fn test_mouse_click_selects_block() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();
    for text in ["A", "B"] {
        state.open_create_session();
        state.set_draft_text(text).unwrap();
        state.commit_session().unwrap();
    }
    state.set_block_areas(vec![
        (0, Rect::new(0, 1, 40, 10)),
        (1, Rect::new(0, 11, 40, 10)),
    ]);

    // termion coordinates are 1-based
    click(&mut handler, &mut state, 5, 13);
    assert_eq!(state.active_index(), Some(1));

    click(&mut handler, &mut state, 5, 40);
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_mouse_ignored_when_disabled() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();
    state.open_create_session();
    state.set_draft_text("A").unwrap();
    state.commit_session().unwrap();
    state.set_block_areas(vec![(0, Rect::new(0, 1, 40, 10))]);
    state.set_enable_mouse(false);

    click(&mut handler, &mut state, 5, 3);
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('?'));
    assert!(state.show_help());
    press(&mut handler, &mut state, Key::Char('a'));
    assert!(state.session().is_none());
    assert!(!press(&mut handler, &mut state, Key::Char('q')));
    assert!(!state.show_help());
}

#[test]
fn test_add_image_block_by_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    fs::write(&path, [1, 2, 3, 4]).unwrap();

    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    press(&mut handler, &mut state, Key::Char('\t'));
    assert_eq!(state.mode(), EditorMode::ImagePath);

    type_str(&mut handler, &mut state, &path.display().to_string());
    press(&mut handler, &mut state, Key::Char('\n'));
    // Still open while the file loads
    assert!(state.session().unwrap().pending().is_some());

    finish_selection(&mut handler, &mut state);
    assert_eq!(state.mode(), EditorMode::Normal);
    assert_eq!(
        state.blocks()[0].image().unwrap().file_name(),
        "photo.png"
    );
}

#[test]
fn test_failed_image_keeps_modal_open() {
    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    press(&mut handler, &mut state, Key::Char('\t'));
    type_str(&mut handler, &mut state, "/definitely/not/here.png");
    press(&mut handler, &mut state, Key::Char('\n'));

    finish_selection(&mut handler, &mut state);
    assert_eq!(state.mode(), EditorMode::ImagePath);
    assert!(state.document().is_empty());
    assert!(state
        .message()
        .unwrap()
        .text
        .starts_with("Image upload failed"));
}

#[test]
fn test_cancelled_image_outcome_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slow.png");
    fs::write(&path, [1, 2, 3]).unwrap();

    let mut handler = handler();
    let mut state = EditorState::new_with_default_theme();

    press(&mut handler, &mut state, Key::Char('a'));
    press(&mut handler, &mut state, Key::Char('\t'));
    type_str(&mut handler, &mut state, &path.display().to_string());
    press(&mut handler, &mut state, Key::Char('\n'));
    press(&mut handler, &mut state, Key::Esc);

    finish_selection(&mut handler, &mut state);
    assert!(state.document().is_empty());
    assert_eq!(state.mode(), EditorMode::Normal);
}
