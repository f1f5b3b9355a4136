//! Toolbar with the application title, formatting toggles and the add hint.
//!
//! Example toolbar: ` BlockQuill   B  I  U    a Add Block   ? Help`

use crate::editor::format::FormatFlags;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the toolbar. Toggles that are on are drawn highlighted.
pub fn render_toolbar(f: &mut Frame, area: Rect, flags: FormatFlags, colors: &ThemeColors) {
    let base = Style::default().fg(colors.toolbar_fg).bg(colors.toolbar_bg);

    let toggle = |label: &'static str, on: bool, modifier: Modifier| {
        let style = if on {
            Style::default()
                .fg(colors.toolbar_fg)
                .bg(colors.toggle_on)
                .add_modifier(modifier)
        } else {
            base.add_modifier(modifier)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        Span::styled(" BlockQuill ", base.add_modifier(Modifier::BOLD)),
        Span::styled("  ", base),
        toggle(" B ", flags.bold, Modifier::BOLD),
        Span::styled(" ", base),
        toggle(" I ", flags.italic, Modifier::ITALIC),
        Span::styled(" ", base),
        toggle(" U ", flags.underline, Modifier::UNDERLINED),
        Span::styled("   ", base),
        Span::styled("a", base.add_modifier(Modifier::BOLD)),
        Span::styled(" Add Block   ", base),
        Span::styled("?", base.add_modifier(Modifier::BOLD)),
        Span::styled(" Help", base),
    ]);

    f.render_widget(Paragraph::new(line).style(base), area);
}
