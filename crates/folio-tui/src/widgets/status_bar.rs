use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let position = if app.max_scroll() == 0 {
            "ALL".to_string()
        } else {
            format!("{}%", app.scroll as u32 * 100 / app.max_scroll() as u32)
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(" {} | {}", app.current_section().title(), position)
        };

        let help_hint = " j/k:scroll h/l:testimonials t:theme q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
