use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;

pub struct FooterWidget;

impl FooterWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;

        let mut social_spans = vec![Span::styled(
            "  ".to_string(),
            Style::default(),
        )];
        for (i, social) in app.content.socials.iter().enumerate() {
            if i > 0 {
                social_spans.push(Span::styled("   ".to_string(), Style::default()));
            }
            social_spans.push(Span::styled(
                format!("[{}] ", i + 1),
                Style::default().fg(theme.muted),
            ));
            social_spans.push(Span::styled(
                social.label.clone(),
                Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED),
            ));
        }

        let year = chrono::Local::now().year();

        vec![
            Line::from(Span::styled(
                format!("  {}", "─".repeat(width.saturating_sub(4) as usize)),
                Style::default().fg(theme.muted),
            )),
            Line::from(""),
            Line::from(social_spans),
            Line::from(Span::styled(
                "  press a number to open the link".to_string(),
                Style::default().fg(theme.muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("  © {} {}. All rights reserved.", year, app.content.name),
                Style::default().fg(theme.muted),
            )),
            Line::from(""),
        ]
    }
}
