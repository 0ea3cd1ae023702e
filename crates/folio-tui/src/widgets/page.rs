use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, SectionId, SECTIONS};

use super::contact::ContactWidget;
use super::footer::FooterWidget;
use super::hero::HeroWidget;
use super::projects::ProjectsWidget;
use super::stats::StatsWidget;
use super::testimonials::TestimonialsWidget;

/// The scrollable single-page document.
///
/// Builds every section as styled lines, records the measured section
/// heights on the app (the geometry the visibility sweep runs against), and
/// renders the visible window via the paragraph scroll offset.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let width = area.width;

        let mut all_lines: Vec<Line<'static>> = Vec::new();
        let mut heights = Vec::with_capacity(SECTIONS.len());
        for id in SECTIONS {
            let section_lines = match id {
                SectionId::Hero => HeroWidget::lines(app, width),
                SectionId::Stats => StatsWidget::lines(app, width),
                SectionId::Projects => ProjectsWidget::lines(app, width),
                SectionId::Testimonials => TestimonialsWidget::lines(app, width),
                SectionId::Contact => ContactWidget::lines(app, width),
                SectionId::Footer => FooterWidget::lines(app, width),
            };
            heights.push(section_lines.len() as u16);
            all_lines.extend(section_lines);
        }

        app.set_page_geometry(heights, area.height);

        let paragraph = Paragraph::new(Text::from(all_lines))
            .style(Style::default().bg(app.theme.bg0))
            .scroll((app.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
