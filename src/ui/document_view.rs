//! Document view: the vertical list of blocks.
//!
//! Text blocks are drawn with the global format flags applied. The active
//! block gets a highlighted border and shows its edit/delete controls.

use crate::document::block::BlockContent;
use crate::editor::format::FormatFlags;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Converts the format flags to a ratatui style modifier.
pub fn format_modifier(flags: FormatFlags) -> Modifier {
    let mut modifier = Modifier::empty();
    if flags.bold {
        modifier |= Modifier::BOLD;
    }
    if flags.italic {
        modifier |= Modifier::ITALIC;
    }
    if flags.underline {
        modifier |= Modifier::UNDERLINED;
    }
    modifier
}

/// Human-readable byte size, e.g. `12.5 KiB`.
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Computes where each visible block goes, starting at the scroll offset.
///
/// Blocks that only partly fit at the bottom are clipped.
pub fn layout_blocks(state: &EditorState, area: Rect) -> Vec<(usize, Rect)> {
    let mut areas = Vec::new();
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (index, block) in state
        .blocks()
        .iter()
        .enumerate()
        .skip(state.scroll_offset())
    {
        if y >= bottom {
            break;
        }
        let height = state.block_height(block).min(bottom - y);
        areas.push((index, Rect::new(area.x, y, area.width, height)));
        y += height;
    }
    areas
}

/// Renders the document and returns the area each visible block was drawn in.
pub fn render_document_view(
    f: &mut Frame,
    area: Rect,
    state: &EditorState,
    colors: &ThemeColors,
) -> Vec<(usize, Rect)> {
    if state.document().is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No blocks yet. Press 'a' to add one.",
                Style::default().fg(colors.block_border),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors.background));
        f.render_widget(hint, area);
        return Vec::new();
    }

    let background = Paragraph::new("").style(Style::default().bg(colors.background));
    f.render_widget(background, area);

    let areas = layout_blocks(state, area);
    let text_style = Style::default()
        .fg(colors.text)
        .add_modifier(format_modifier(state.format()));

    for &(index, block_area) in &areas {
        let Some(block) = state.document().get(index) else {
            continue;
        };
        let is_active = state.active_index() == Some(index);

        let title = if state.show_block_numbers() {
            format!(" {} · {} ", index + 1, block.kind())
        } else {
            format!(" {} ", block.kind())
        };
        let border_color = if is_active {
            colors.active_border
        } else {
            colors.block_border
        };

        let mut frame = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(title, Style::default().fg(border_color)))
            .style(Style::default().bg(colors.background));

        if is_active {
            frame = frame.title(
                Line::from(vec![
                    Span::styled(
                        " [e] Edit ",
                        Style::default()
                            .fg(colors.controls)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " [d] Delete ",
                        Style::default()
                            .fg(colors.error)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .right_aligned(),
            );
        }

        let body = match block.content() {
            BlockContent::Text(text) => Paragraph::new(text.as_str())
                .style(text_style)
                .wrap(Wrap { trim: false }),
            BlockContent::Image(handle) => Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("▣ {} ({})", handle.file_name(), format_size(handle.len())),
                    Style::default()
                        .fg(colors.image)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    handle.source().display().to_string(),
                    Style::default().fg(colors.block_border),
                )),
            ]),
        };

        f.render_widget(body.block(frame), block_area);
    }

    areas
}
