use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let left = format!(" {} ", initials(&app.content.name));
        let nav = " About · Projects · Testimonials · Contact";
        let right = format!(" {} · ?:help ", app.config.ui.theme.as_str());

        let used = UnicodeWidthStr::width(left.as_str())
            + UnicodeWidthStr::width(nav)
            + UnicodeWidthStr::width(right.as_str());
        let padding_len = area.width.saturating_sub(used as u16) as usize;

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(nav.to_string(), Style::default().fg(theme.fg1).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(right, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Uppercase initials of the first two name parts ("John Doe" -> "JD")
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
