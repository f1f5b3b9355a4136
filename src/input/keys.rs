//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (add a block, commit the modal)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the editor
    Quit,
    /// Open the modal to add a block
    AddBlock,
    /// Open the modal to edit the active block
    EditBlock,
    /// Delete the active block
    DeleteBlock,
    /// Make the next block active
    MoveDown,
    /// Make the previous block active
    MoveUp,
    /// Make the first block active
    JumpToFirst,
    /// Make the last block active
    JumpToLast,
    /// Clear the active block
    ClearActive,
    /// Toggle bold display of text blocks
    ToggleBold,
    /// Toggle italic display of text blocks
    ToggleItalic,
    /// Toggle underlined display of text blocks
    ToggleUnderline,
    /// Toggle help overlay
    Help,
    /// Commit the modal (or start loading the image)
    Commit,
    /// Close the modal without changes
    Cancel,
    /// Switch the draft between text and image
    SwitchKind,
    /// Insert a character into the draft
    InsertCharacter(char),
    /// Insert a line break into a text draft
    InsertNewline,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    DeleteForward,
    /// Move the draft cursor left
    CursorLeft,
    /// Move the draft cursor right
    CursorRight,
    /// Move the draft cursor to the start
    CursorHome,
    /// Move the draft cursor to the end
    CursorEnd,
    /// Delete from the cursor to the end
    KillToEnd,
    /// Paste the system clipboard into the draft
    Paste,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// - Normal mode: `a` add, `e`/Enter edit, `d` delete, `j`/`k` move, `b`/`i`/`u` formatting
/// - Compose and ImagePath modes: text entry, Enter commits, Tab switches kind, Esc cancels
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use blockquill::editor::mode::EditorMode;
/// use blockquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('a'));
/// let input_event = map_key_event(event, &EditorMode::Normal);
/// assert_eq!(input_event, InputEvent::AddBlock);
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Char('q') => InputEvent::Quit,
            Key::Char('a') => InputEvent::AddBlock,
            Key::Char('e') | Key::Char('\n') => InputEvent::EditBlock,
            Key::Char('d') | Key::Delete => InputEvent::DeleteBlock,
            Key::Char('j') | Key::Down => InputEvent::MoveDown,
            Key::Char('k') | Key::Up => InputEvent::MoveUp,
            Key::Char('g') | Key::Home => InputEvent::JumpToFirst,
            Key::Char('G') | Key::End => InputEvent::JumpToLast,
            Key::Char('b') => InputEvent::ToggleBold,
            Key::Char('i') => InputEvent::ToggleItalic,
            Key::Char('u') => InputEvent::ToggleUnderline,
            Key::Char('?') | Key::F(1) => InputEvent::Help,
            Key::Esc => InputEvent::ClearActive,
            _ => InputEvent::Unknown,
        },
        EditorMode::Compose | EditorMode::ImagePath => match key {
            Key::Esc => InputEvent::Cancel,
            Key::Char('\n') => InputEvent::Commit,
            Key::Char('\t') | Key::BackTab => InputEvent::SwitchKind,
            Key::Ctrl('n') | Key::Alt('\r') => InputEvent::InsertNewline,
            Key::Backspace => InputEvent::Backspace,
            Key::Delete | Key::Ctrl('d') => InputEvent::DeleteForward,
            Key::Left => InputEvent::CursorLeft,
            Key::Right => InputEvent::CursorRight,
            Key::Home | Key::Ctrl('a') => InputEvent::CursorHome,
            Key::End | Key::Ctrl('e') => InputEvent::CursorEnd,
            Key::Ctrl('k') => InputEvent::KillToEnd,
            Key::Ctrl('v') => InputEvent::Paste,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_quit() {
        let event = Event::Key(Key::Char('q'));
        assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::Quit);
    }

    #[test]
    fn test_normal_mode_movement_vim_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('j')), &EditorMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('k')), &EditorMode::Normal),
            InputEvent::MoveUp
        );
    }

    #[test]
    fn test_normal_mode_movement_arrow_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Down), &EditorMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Up), &EditorMode::Normal),
            InputEvent::MoveUp
        );
    }

    #[test]
    fn test_formatting_toggles() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('b')), &EditorMode::Normal),
            InputEvent::ToggleBold
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('i')), &EditorMode::Normal),
            InputEvent::ToggleItalic
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('u')), &EditorMode::Normal),
            InputEvent::ToggleUnderline
        );
    }

    #[test]
    fn test_compose_mode_typing() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('b')), &EditorMode::Compose),
            InputEvent::InsertCharacter('b')
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), &EditorMode::Compose),
            InputEvent::Commit
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), &EditorMode::Compose),
            InputEvent::Cancel
        );
    }

    #[test]
    fn test_newline_keys() {
        // termion reports Alt+Enter as Alt('\r')
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('\r')), &EditorMode::Compose),
            InputEvent::InsertNewline
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Ctrl('n')), &EditorMode::Compose),
            InputEvent::InsertNewline
        );
    }

    #[test]
    fn test_image_mode_shares_modal_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\t')), &EditorMode::ImagePath),
            InputEvent::SwitchKind
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('/')), &EditorMode::ImagePath),
            InputEvent::InsertCharacter('/')
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('x')), &EditorMode::Normal),
            InputEvent::Unknown
        );
    }
}
