use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, SectionId};

pub struct ContactWidget;

impl ContactWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let revealed = app.is_revealed(SectionId::Contact);

        let heading_fg = if revealed { theme.heading } else { theme.hidden };
        let label_fg = if revealed { theme.fg0 } else { theme.hidden };
        let field_fg = if revealed { theme.muted } else { theme.hidden };

        let field_width = width.saturating_sub(15).max(8) as usize;
        let field = "·".repeat(field_width);
        let label_style = Style::default().fg(label_fg).add_modifier(Modifier::BOLD);
        let field_style = Style::default().fg(field_fg);

        let field_line = |label: &str| {
            Line::from(vec![
                Span::styled(format!("  {label:<9}"), label_style),
                Span::styled(field.clone(), field_style),
            ])
        };
        let continuation = || {
            Line::from(vec![
                Span::styled("  ".to_string() + &" ".repeat(9), label_style),
                Span::styled(field.clone(), field_style),
            ])
        };

        vec![
            Line::from(Span::styled(
                "  Get In Touch".to_string(),
                Style::default().fg(heading_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line("Name"),
            Line::from(""),
            field_line("Email"),
            Line::from(""),
            field_line("Message"),
            continuation(),
            continuation(),
            Line::from(""),
        ]
    }
}
