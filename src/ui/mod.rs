//! UI module for the blockquill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal interface,
//! including layout management and widget composition.

pub mod document_view;
pub mod edit_prompt;
pub mod help_overlay;
pub mod message_area;
pub mod session_modal;
pub mod status_line;
pub mod toolbar;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::editor::state::EditorState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of four stacked areas plus overlays:
/// - Toolbar (top): Title, formatting toggles and the add hint
/// - Document view: The blocks
/// - Status line: Mode, block count and active position
/// - Message area (bottom): Feedback and warnings
/// - Overlays: The add/edit modal and the help screen
///
/// # Example
///
/// ```
/// use blockquill::ui::UI;
/// use blockquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// Also records where each block was drawn so mouse clicks can be mapped
    /// back to blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
    ) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Toolbar
                    Constraint::Min(1),    // Document view
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            toolbar::render_toolbar(f, chunks[0], state.format(), colors);

            // Adjust scroll to ensure the active block is visible
            state.adjust_scroll_to_active(chunks[1].height);
            let areas = document_view::render_document_view(f, chunks[1], state, colors);
            state.set_block_areas(areas);

            status_line::render_status_line(f, chunks[2], state, colors);
            message_area::render_message_area(f, chunks[3], state, colors);

            // Modal and help are rendered on top
            session_modal::render_session_modal(f, state, colors);
            if state.show_help() {
                help_overlay::render_help_overlay(f, colors, state.help_scroll());
            }
        })?;

        Ok(())
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageCommitPolicy;
    use crate::document::block::{BlockKind, ImageHandle};
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_ui_with_light_theme() {
        let theme = get_builtin_theme("default-light").unwrap();
        let ui = UI::new(theme);
        assert_eq!(ui.theme_name(), "default-light");
    }

    #[test]
    fn test_render_empty_document() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = EditorState::new_with_default_theme();

        ui.render(&mut terminal, &mut state).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("BlockQuill"));
        assert!(text.contains("No blocks yet"));
    }

    #[test]
    fn test_render_records_block_areas() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = EditorState::new_with_default_theme();
        state.open_create_session();
        state.set_draft_text("Hello").unwrap();
        state.commit_session().unwrap();
        state.set_active_index(Some(0));

        ui.render(&mut terminal, &mut state).unwrap();

        // Toolbar occupies row 0, so the first block starts on row 1.
        assert_eq!(state.block_at(2, 1), Some(0));
        let text = buffer_text(&terminal);
        assert!(text.contains("Hello"));
        assert!(text.contains("[e] Edit"));
    }

    #[test]
    fn test_render_modal_titles() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = EditorState::new_with_default_theme();

        state.open_create_session();
        ui.render(&mut terminal, &mut state).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Text Block"));
        assert!(!text.contains("Edit Block"));

        state.set_draft_text("x").unwrap();
        state.commit_session().unwrap();
        state.open_edit_session(0).unwrap();
        ui.render(&mut terminal, &mut state).unwrap();
        assert!(buffer_text(&terminal).contains("Edit Block"));
    }

    fn state_with_image(policy: ImageCommitPolicy) -> EditorState {
        let mut state = EditorState::new_with_default_theme();
        state.set_image_commit(policy);
        state.open_create_session();
        state.set_draft_kind(BlockKind::Image).unwrap();
        let (ticket, _) = state.begin_image_selection().unwrap();
        state
            .commit_image_selection(ticket, Ok(ImageHandle::new("/pics/cat.png", vec![1, 2])))
            .unwrap();
        state.open_edit_session(0).unwrap();
        state
    }

    #[test]
    fn test_image_edit_hint_follows_commit_policy() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        let mut state = state_with_image(ImageCommitPolicy::Append);
        ui.render(&mut terminal, &mut state).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("A new path adds another block."));
        assert!(!text.contains("replaces it"));

        let mut state = state_with_image(ImageCommitPolicy::Replace);
        ui.render(&mut terminal, &mut state).unwrap();
        assert!(buffer_text(&terminal).contains("A new path replaces it."));
    }
}
