use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, SectionId};

use super::wrap_text;

pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let revealed = app.is_revealed(SectionId::Projects);

        let heading_fg = if revealed { theme.heading } else { theme.hidden };
        let title_fg = if revealed { theme.fg0 } else { theme.hidden };
        let bullet_fg = if revealed { theme.accent } else { theme.hidden };
        let body_fg = if revealed { theme.fg1 } else { theme.hidden };

        let mut lines = vec![
            Line::from(Span::styled(
                "  Key Projects".to_string(),
                Style::default().fg(heading_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for project in &app.content.projects {
            lines.push(Line::from(vec![
                Span::styled("  ▪ ".to_string(), Style::default().fg(bullet_fg)),
                Span::styled(
                    project.title.clone(),
                    Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
                ),
            ]));
            for row in wrap_text(&project.description, width.saturating_sub(6)) {
                lines.push(Line::from(Span::styled(
                    format!("    {row}"),
                    Style::default().fg(body_fg),
                )));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}
