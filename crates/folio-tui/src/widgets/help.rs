use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;

        let entries: Vec<(&str, &str)> = vec![
            (keymap.scroll_down.as_str(), "Scroll down"),
            (keymap.scroll_up.as_str(), "Scroll up"),
            (keymap.scroll_half_down.as_str(), "Half page down"),
            (keymap.scroll_half_up.as_str(), "Half page up"),
            (keymap.jump_to_top.as_str(), "Jump to top"),
            (keymap.jump_to_bottom.as_str(), "Jump to bottom"),
            (keymap.next_testimonial.as_str(), "Next testimonial"),
            (keymap.prev_testimonial.as_str(), "Previous testimonial"),
            (keymap.toggle_theme.as_str(), "Toggle light/dark theme"),
            ("1-9", "Open social link"),
            (keymap.quit.as_str(), "Quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (key, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:>8}  "),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.to_string(), Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  press any key to close".to_string(),
            Style::default().fg(theme.muted),
        )));

        let height = lines.len() as u16 + 2;
        let area = centered_rect(44, height, frame.area());

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(44, 16, area);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
        assert_eq!(rect.x, 18);
        assert_eq!(rect.y, 4);
    }

    #[test]
    fn test_centered_rect_clamped_to_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(44, 16, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }
}
