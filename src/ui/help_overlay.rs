//! Help overlay for displaying keybindings.

use super::centered_rect;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Blocks",
        &[
            ("a", "Add a block"),
            ("e / Enter", "Edit the active block"),
            ("d / Delete", "Delete the active block"),
            ("j/k / ↓/↑", "Move to next/previous block"),
            ("g / G", "Jump to first/last block"),
            ("Esc", "Clear the active block"),
        ],
    ),
    (
        "Formatting (applies to all text blocks)",
        &[
            ("b", "Toggle bold"),
            ("i", "Toggle italic"),
            ("u", "Toggle underline"),
        ],
    ),
    (
        "Add/Edit Modal",
        &[
            ("Enter", "Add or save the block (load the image)"),
            ("Tab", "Switch between text and image"),
            ("Ctrl-n", "Insert a new line"),
            ("Ctrl-a / Ctrl-e", "Move to start/end"),
            ("Ctrl-k", "Delete to end"),
            ("Ctrl-v", "Paste from clipboard"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Click", "Select the block under the pointer"),
            ("Scroll wheel", "Move to next/previous block"),
        ],
    ),
    (
        "Other",
        &[("?/F1", "Toggle this help"), ("q", "Quit (nothing is saved)")],
    ),
];

/// Number of lines produced by [`help_lines`].
pub fn help_line_count() -> usize {
    // Leading blank, heading and trailing blank per section, closing hint
    1 + SECTIONS
        .iter()
        .map(|(_, bindings)| bindings.len() + 2)
        .sum::<usize>()
        + 1
}

/// Builds the help text, one section per group of bindings.
pub fn help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(colors.active_border)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(colors.controls);

    let mut lines = vec![Line::from("")];
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(*title, heading)));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", keys), key),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "↑/↓ or j/k to scroll • ? or Esc to close",
        Style::default()
            .fg(colors.info)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}

/// Renders a centered help overlay showing keybindings.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors, scroll: usize) {
    let area = centered_rect(70, 80, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" BlockQuill Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background).fg(colors.foreground));

    let paragraph = Paragraph::new(help_lines(colors))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
