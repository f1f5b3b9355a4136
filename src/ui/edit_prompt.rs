//! Rendering of editable text with a block cursor.

use crate::editor::buffer::EditBuffer;
use crate::theme::colors::ThemeColors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Builds a line showing `text` with the character at byte offset `cursor` highlighted.
///
/// A cursor at the end of the text is drawn on a trailing space. When
/// `cursor` is `None` or the cursor is in its blink-off phase the text is
/// drawn plainly.
pub fn line_with_cursor(
    text: &str,
    cursor: Option<usize>,
    cursor_visible: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let style = Style::default().fg(colors.foreground);

    let Some(cursor) = cursor.map(|c| c.min(text.len())) else {
        return Line::from(Span::styled(text.to_string(), style));
    };

    // Split buffer into: text before cursor, char at cursor, text after cursor
    let before = &text[..cursor];
    let mut rest = text[cursor..].chars();
    let at_cursor = rest.next().unwrap_or(' ');
    let after: String = rest.collect();

    let cursor_style = if cursor_visible {
        Style::default()
            .fg(colors.background)
            .bg(colors.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        style
    };

    let mut spans = vec![
        Span::styled(before.to_string(), style),
        Span::styled(at_cursor.to_string(), cursor_style),
    ];
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    Line::from(spans)
}

/// Builds a single-line prompt such as `Path: /tmp/cat.png` with a cursor.
pub fn prompt_line(
    prompt: &str,
    buffer: &EditBuffer,
    cursor_visible: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let mut line = line_with_cursor(buffer.text(), Some(buffer.cursor()), cursor_visible, colors);
    line.spans.insert(
        0,
        Span::styled(
            prompt.to_string(),
            Style::default()
                .fg(colors.info)
                .add_modifier(Modifier::BOLD),
        ),
    );
    line
}

/// Splits a multi-line draft into lines, placing the cursor on the right one.
///
/// Returns the lines and the index of the line holding the cursor.
pub fn draft_lines(
    buffer: &EditBuffer,
    cursor_visible: bool,
    colors: &ThemeColors,
) -> (Vec<Line<'static>>, usize) {
    let text = buffer.text();
    let cursor = buffer.cursor();

    let mut lines = Vec::new();
    let mut cursor_line = 0;
    let mut start = 0;
    for (idx, segment) in text.split('\n').enumerate() {
        let end = start + segment.len();
        let local = if cursor >= start && cursor <= end {
            cursor_line = idx;
            Some(cursor - start)
        } else {
            None
        };
        lines.push(line_with_cursor(segment, local, cursor_visible, colors));
        start = end + 1; // skip the newline
    }
    (lines, cursor_line)
}
