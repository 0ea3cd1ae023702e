use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, SectionId};

pub struct StatsWidget;

impl StatsWidget {
    /// Row offset of stat line `index` from the top of the section. The
    /// visibility sweep uses this to treat each counter as its own
    /// observable element.
    pub fn stat_row(index: usize) -> u16 {
        2 + index as u16
    }

    pub fn lines(app: &App, _width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let revealed = app.is_revealed(SectionId::Stats);

        let heading_fg = if revealed { theme.heading } else { theme.hidden };
        let value_fg = if revealed { theme.accent } else { theme.hidden };
        let label_fg = if revealed { theme.fg1 } else { theme.hidden };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}", app.content.about_heading),
                Style::default().fg(heading_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (stat, counter) in app.content.stats.iter().zip(&app.counters) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>8}", counter.display()),
                    Style::default().fg(value_fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", stat.label),
                    Style::default().fg(label_fg),
                ),
            ]));
        }
        lines.push(Line::from(""));

        lines
    }
}
