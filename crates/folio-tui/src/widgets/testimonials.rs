use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, SectionId};

use super::wrap_text;

pub struct TestimonialsWidget;

impl TestimonialsWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let revealed = app.is_revealed(SectionId::Testimonials);

        let heading_fg = if revealed { theme.heading } else { theme.hidden };
        let quote_fg = if revealed { theme.fg1 } else { theme.hidden };
        let bar_fg = if revealed { theme.accent } else { theme.hidden };
        let author_fg = if revealed { theme.fg0 } else { theme.hidden };
        let hint_fg = if revealed { theme.muted } else { theme.hidden };

        let mut lines = vec![
            Line::from(Span::styled(
                "  What Others Say".to_string(),
                Style::default().fg(heading_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let testimonials = &app.content.testimonials;
        if testimonials.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Nothing here yet.".to_string(),
                Style::default().fg(hint_fg),
            )));
            lines.push(Line::from(""));
            return lines;
        }

        let quote_width = width.saturating_sub(6);
        // All testimonials share the tallest card so stepping through them
        // never shifts the sections below.
        let card_rows = testimonials
            .iter()
            .map(|t| wrap_text(&format!("\"{}\"", t.text), quote_width).len())
            .max()
            .unwrap_or(1);

        let current = &testimonials[app.carousel.index()];
        let mut quote_lines = wrap_text(&format!("\"{}\"", current.text), quote_width);
        quote_lines.resize(card_rows, String::new());

        for row in quote_lines {
            lines.push(Line::from(vec![
                Span::styled("  │ ".to_string(), Style::default().fg(bar_fg)),
                Span::styled(
                    row,
                    Style::default().fg(quote_fg).add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  — {}, {}", current.author, current.title),
            Style::default().fg(author_fg),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "  ‹ h · prev    next · l ›    {}/{}",
                app.carousel.index() + 1,
                testimonials.len()
            ),
            Style::default().fg(hint_fg),
        )));
        lines.push(Line::from(""));

        lines
    }
}
