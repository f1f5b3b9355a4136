//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, COMPOSE, IMAGE)
//! - Number of blocks in the document
//! - Active format flags
//! - Active block position (active/total)
//!
//! Example status line: `NORMAL | 4 blocks | B U                    2/4`

use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Builds the left-hand text of the status line.
pub fn status_text(state: &EditorState) -> String {
    let count = state.document().len();
    let noun = if count == 1 { "block" } else { "blocks" };
    let mut text = format!("{} | {} {}", state.mode(), count, noun);

    let flags = state.format();
    if !flags.is_plain() {
        let mut active = Vec::new();
        if flags.bold {
            active.push("B");
        }
        if flags.italic {
            active.push("I");
        }
        if flags.underline {
            active.push("U");
        }
        text.push_str(&format!(" | {}", active.join(" ")));
    }
    text
}

/// Renders the status line showing mode, block count and active position.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let left = status_text(state);

    let position = match state.active_index() {
        Some(index) => format!("{}/{}", index + 1, state.document().len()),
        None => format!("-/{}", state.document().len()),
    };

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let used = left.chars().count() + position.len();
    let padding = if used + 1 < total_width {
        total_width - used
    } else {
        1
    };

    let style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);

    let line = Line::from(vec![
        Span::styled(left, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(position, style),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);
}
