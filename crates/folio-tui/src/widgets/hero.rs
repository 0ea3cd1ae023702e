use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, SectionId};

use super::wrap_text;

pub struct HeroWidget;

impl HeroWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let revealed = app.is_revealed(SectionId::Hero);

        let heading_fg = if revealed { theme.heading } else { theme.hidden };
        let body_fg = if revealed { theme.fg1 } else { theme.hidden };
        let rule_fg = if revealed { theme.accent } else { theme.hidden };

        let greeting = format!("Hi, I'm {}", app.content.name);
        let rule_len = (greeting.len() + 4).min(width.saturating_sub(4) as usize);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {greeting}"),
                Style::default().fg(heading_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", "─".repeat(rule_len)),
                Style::default().fg(rule_fg),
            )),
            Line::from(""),
        ];

        for row in wrap_text(&app.content.tagline, width.saturating_sub(4)) {
            lines.push(Line::from(Span::styled(
                format!("  {row}"),
                Style::default().fg(body_fg),
            )));
        }
        lines.push(Line::from(""));

        lines
    }
}
