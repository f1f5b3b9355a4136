//! Input event handler for polling and processing events.
//!
//! Terminal input and image-selection outcomes arrive on one channel as
//! [`AppEvent`]s. Terminal events are read by a background thread; outcomes
//! are sent by the [`ImageSelector`] worker threads. The event loop drains
//! the channel with [`InputHandler::poll_event`] and applies each event to
//! the editor state with [`InputHandler::handle_app_event`].

use super::keys::{map_key_event, InputEvent};
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use crate::file::picker::{ImageSelector, SelectionOutcome, SelectionRules};
use crate::ui::help_overlay;
use anyhow::{anyhow, Result};
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::TermRead;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// A key or mouse event from the terminal
    Terminal(Event),
    /// An image selection finished
    Selection(SelectionOutcome),
}

impl From<SelectionOutcome> for AppEvent {
    fn from(outcome: SelectionOutcome) -> Self {
        AppEvent::Selection(outcome)
    }
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler receives [`AppEvent`]s, converts terminal events to
/// high-level [`InputEvent`]s, and updates the editor state accordingly.
pub struct InputHandler {
    events: Receiver<AppEvent>,
    selector: ImageSelector<AppEvent>,
}

impl InputHandler {
    /// Creates a new InputHandler that reads terminal events from stdin.
    ///
    /// A background thread forwards stdin events into the handler's channel.
    pub fn new(rules: SelectionRules) -> Self {
        let (sender, receiver) = mpsc::channel();
        spawn_stdin_reader(sender.clone());
        Self::with_channel(sender, receiver, rules)
    }

    /// Creates an InputHandler over an existing channel, without reading stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use blockquill::file::picker::SelectionRules;
    /// use blockquill::input::InputHandler;
    /// use std::sync::mpsc;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// let handler = InputHandler::with_channel(tx, rx, SelectionRules::default());
    /// ```
    pub fn with_channel(
        sender: Sender<AppEvent>,
        receiver: Receiver<AppEvent>,
        rules: SelectionRules,
    ) -> Self {
        Self {
            events: receiver,
            selector: ImageSelector::new(sender, rules),
        }
    }

    /// Waits up to `timeout` for the next event.
    ///
    /// Returns Some(AppEvent) if an event occurred, None if timeout elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if every sender has gone away.
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<AppEvent>> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(anyhow!("Input channel closed")),
        }
    }

    /// Applies an event from the channel. Returns true if the application should quit.
    pub fn handle_app_event(&mut self, event: AppEvent, state: &mut EditorState) -> Result<bool> {
        match event {
            AppEvent::Terminal(event) => self.handle_event(event, state),
            AppEvent::Selection(outcome) => {
                // Stale outcomes and failures are already handled by the state.
                let _ = state.commit_image_selection(outcome.ticket, outcome.result);
                Ok(false)
            }
        }
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns `Ok(true)` if the application should quit, `Ok(false)` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use blockquill::editor::state::EditorState;
    /// use blockquill::file::picker::SelectionRules;
    /// use blockquill::input::InputHandler;
    /// use std::sync::mpsc;
    /// use termion::event::{Event, Key};
    ///
    /// let (tx, rx) = mpsc::channel();
    /// let mut handler = InputHandler::with_channel(tx, rx, SelectionRules::default());
    /// let mut state = EditorState::new_with_default_theme();
    /// let should_quit = handler.handle_event(Event::Key(Key::Char('q')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        if let Event::Mouse(mouse_event) = event {
            if state.enable_mouse() {
                self.handle_mouse(mouse_event, state);
            }
            return Ok(false);
        }

        // Help overlay swallows keys until closed
        if state.show_help() {
            if let Event::Key(key) = event {
                use termion::event::Key;
                match key {
                    Key::Char('j') | Key::Down => {
                        state.scroll_help_down(help_overlay::help_line_count())
                    }
                    Key::Char('k') | Key::Up => state.scroll_help_up(),
                    Key::Char('q') | Key::Char('?') | Key::Esc | Key::F(1) => state.toggle_help(),
                    _ => {}
                }
            }
            return Ok(false);
        }

        let mode = state.mode();
        match map_key_event(event, &mode) {
            InputEvent::Quit => return Ok(true),
            InputEvent::AddBlock => state.open_create_session(),
            InputEvent::EditBlock => state.edit_active(),
            InputEvent::DeleteBlock => state.delete_active(),
            InputEvent::MoveDown => state.move_active_down(),
            InputEvent::MoveUp => state.move_active_up(),
            InputEvent::JumpToFirst => state.move_active_first(),
            InputEvent::JumpToLast => state.move_active_last(),
            InputEvent::ClearActive => state.set_active_index(None),
            InputEvent::ToggleBold => state.toggle_bold(),
            InputEvent::ToggleItalic => state.toggle_italic(),
            InputEvent::ToggleUnderline => state.toggle_underline(),
            InputEvent::Help => state.toggle_help(),
            InputEvent::Commit => self.commit(mode, state),
            InputEvent::Cancel => {
                state.cancel_session();
                state.set_message("Edit cancelled".to_string(), MessageLevel::Info);
            }
            InputEvent::SwitchKind => state.toggle_draft_kind(),
            InputEvent::InsertCharacter(c) => state.insert_char(c),
            InputEvent::InsertNewline => state.insert_newline(),
            InputEvent::Backspace => state.backspace(),
            InputEvent::DeleteForward => state.delete_at_cursor(),
            InputEvent::CursorLeft => state.cursor_left(),
            InputEvent::CursorRight => state.cursor_right(),
            InputEvent::CursorHome => state.cursor_home(),
            InputEvent::CursorEnd => state.cursor_end(),
            InputEvent::KillToEnd => state.kill_to_end(),
            InputEvent::Paste => paste_clipboard(state),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }

    fn commit(&self, mode: EditorMode, state: &mut EditorState) {
        match mode {
            EditorMode::ImagePath => {
                // Editing an image without typing a new path keeps the block as is.
                let path_empty = state
                    .session()
                    .map(|s| s.image_path().text().trim().is_empty())
                    .unwrap_or(true);
                let editing = state.session().map(|s| !s.is_creating()).unwrap_or(false);
                if path_empty && editing {
                    let _ = state.commit_session();
                    return;
                }

                match state.begin_image_selection() {
                    Ok((ticket, path)) => self.selector.select(ticket, path),
                    Err(e) => state.set_message(e.to_string(), MessageLevel::Error),
                }
            }
            // Rejections are reported to the user by the state itself.
            _ => {
                let _ = state.commit_session();
            }
        }
    }

    fn handle_mouse(&self, mouse_event: MouseEvent, state: &mut EditorState) {
        // Pointer only drives the document while the modal is closed.
        if state.session().is_some() || state.show_help() {
            return;
        }
        match mouse_event {
            MouseEvent::Press(MouseButton::Left, x, y) => {
                // termion reports 1-based coordinates
                let hit = state.block_at(x.saturating_sub(1), y.saturating_sub(1));
                state.set_active_index(hit);
            }
            MouseEvent::Press(MouseButton::WheelUp, _, _) => state.move_active_up(),
            MouseEvent::Press(MouseButton::WheelDown, _, _) => state.move_active_down(),
            _ => {}
        }
    }
}

fn paste_clipboard(state: &mut EditorState) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => state.insert_str(&text),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard paste failed");
            state.set_message(format!("Paste failed: {}", e), MessageLevel::Warning);
        }
    }
}

fn spawn_stdin_reader(sender: Sender<AppEvent>) {
    thread::spawn(move || {
        for event in io::stdin().events() {
            match event {
                Ok(event) => {
                    if sender.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
            }
        }
    });
}
