//! The add/edit modal drawn over the document while a session is open.

use super::centered_rect;
use super::edit_prompt::{draft_lines, prompt_line};
use crate::config::ImageCommitPolicy;
use crate::document::block::BlockKind;
use crate::editor::session::EditSession;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the modal for the open session, if any.
///
/// Displays:
/// - Title "Add Block" or "Edit Block"
/// - Text/Image kind selector
/// - The text draft, or the image path prompt with a loading indicator
/// - Footer with the commit and cancel keys
pub fn render_session_modal(f: &mut Frame, state: &EditorState, colors: &ThemeColors) {
    let Some(session) = state.session() else {
        return;
    };

    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let title = if session.is_creating() {
        " Add Block "
    } else {
        " Edit Block "
    };
    let frame = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.modal_border))
        .style(Style::default().bg(colors.background));
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kind selector
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Draft editor
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(kind_selector(session, colors)).alignment(Alignment::Center),
        chunks[0],
    );

    match session.draft_kind() {
        BlockKind::Text => {
            let (lines, cursor_line) = draft_lines(session.draft(), state.cursor_visible(), colors);
            let visible = chunks[2].height.max(1) as usize;
            let scroll = cursor_line.saturating_sub(visible - 1) as u16;
            f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[2]);
        }
        BlockKind::Image => {
            let mut lines = vec![prompt_line(
                "Path: ",
                session.image_path(),
                state.cursor_visible(),
                colors,
            )];
            if session.pending().is_some() {
                lines.push(Line::from(Span::styled(
                    "Loading image...",
                    Style::default().fg(colors.info),
                )));
            } else if let Some(current) = editing_image_name(state) {
                lines.push(Line::from(Span::styled(
                    current_image_hint(&current, state.image_commit()),
                    Style::default().fg(colors.block_border),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "Type the path of an image file and press Enter",
                    Style::default().fg(colors.block_border),
                )));
            }
            f.render_widget(Paragraph::new(lines), chunks[2]);
        }
    }

    let commit_label = if session.is_creating() { "Add" } else { "Save" };
    let key = Style::default()
        .fg(colors.controls)
        .add_modifier(Modifier::BOLD);
    let mut footer = vec![
        Span::styled("Enter", key),
        Span::raw(format!(" {}  ", commit_label)),
    ];
    if session.can_switch_kind() {
        footer.push(Span::styled("Tab", key));
        footer.push(Span::raw(" Text/Image  "));
    }
    if session.draft_kind() == BlockKind::Text {
        footer.push(Span::styled("Ctrl-n", key));
        footer.push(Span::raw(" New line  "));
    }
    footer.push(Span::styled("Esc", key));
    footer.push(Span::raw(" Cancel"));
    f.render_widget(
        Paragraph::new(Line::from(footer))
            .style(Style::default().fg(colors.foreground))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn kind_selector(session: &EditSession, colors: &ThemeColors) -> Line<'static> {
    let option = |label: &'static str, kind: BlockKind| {
        let style = if session.draft_kind() == kind {
            Style::default()
                .fg(colors.toolbar_fg)
                .bg(colors.toggle_on)
                .add_modifier(Modifier::BOLD)
        } else if session.can_switch_kind() {
            Style::default().fg(colors.foreground)
        } else {
            Style::default()
                .fg(colors.block_border)
                .add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };

    Line::from(vec![
        option(" Text Block ", BlockKind::Text),
        Span::raw("  "),
        option(" Image Block ", BlockKind::Image),
    ])
}

/// Explains what a new path does to the image block being edited.
fn current_image_hint(current: &str, policy: ImageCommitPolicy) -> String {
    match policy {
        ImageCommitPolicy::Append => {
            format!("Current: {}. A new path adds another block.", current)
        }
        ImageCommitPolicy::Replace => format!("Current: {}. A new path replaces it.", current),
    }
}

fn editing_image_name(state: &EditorState) -> Option<String> {
    let index = state.session_index()?;
    let block = state.document().get(index)?;
    block.image().map(|handle| handle.file_name())
}
