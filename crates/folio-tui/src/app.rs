use std::time::Instant;

use tracing::{debug, warn};

use folio_core::carousel::CarouselCursor;
use folio_core::counter::CounterAnimator;
use folio_core::observe::{ObserveConfig, ViewportObserver};
use folio_core::reveal::{RevealState, SECTION_THRESHOLD};
use folio_core::{AppConfig, PortfolioContent};

use crate::theme::Theme;
use crate::themes;
use crate::widgets::stats::StatsWidget;

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Stats,
    Projects,
    Testimonials,
    Contact,
    Footer,
}

/// Page order. Layout, rendering and visibility sweeps all iterate this.
pub const SECTIONS: [SectionId; 6] = [
    SectionId::Hero,
    SectionId::Stats,
    SectionId::Projects,
    SectionId::Testimonials,
    SectionId::Contact,
    SectionId::Footer,
];

impl SectionId {
    pub fn index(&self) -> usize {
        SECTIONS.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::Stats => "About",
            SectionId::Projects => "Projects",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Fraction of a page region currently inside the viewport.
///
/// `top`/`height` are page rows, `scroll` is the first visible page row and
/// `viewport` the number of visible rows.
pub fn visible_fraction(top: u16, height: u16, scroll: u16, viewport: u16) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let view_top = scroll as u32;
    let view_bottom = scroll as u32 + viewport as u32;
    let region_top = top as u32;
    let region_bottom = top as u32 + height as u32;

    let overlap = region_bottom
        .min(view_bottom)
        .saturating_sub(region_top.max(view_top));
    overlap as f64 / height as f64
}

/// Application state
pub struct App {
    /// Application configuration (owned; saved back on theme toggle)
    pub config: AppConfig,
    /// Portfolio document being displayed
    pub content: PortfolioContent,
    /// Active color palette
    pub theme: Theme,
    /// Current application mode
    pub mode: Mode,
    /// First visible page row
    pub scroll: u16,
    /// Height of the page area in rows
    pub viewport_height: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// One animator per statistic, in content order
    pub counters: Vec<CounterAnimator>,
    /// Cursor over the testimonial collection
    pub carousel: CarouselCursor,
    /// Entrance flags, parallel to `SECTIONS`
    reveals: Vec<RevealState>,
    section_observer: ViewportObserver<SectionId>,
    counter_observer: ViewportObserver<usize>,
    /// Section heights measured during the last draw, parallel to `SECTIONS`
    section_heights: Vec<u16>,
    total_height: u16,
}

impl App {
    pub fn new(config: AppConfig, content: PortfolioContent, theme: Theme) -> Self {
        let mut section_observer = ViewportObserver::new();
        for id in SECTIONS {
            // The footer carries no entrance effect
            if id != SectionId::Footer {
                section_observer.register(id, ObserveConfig::with_threshold(SECTION_THRESHOLD));
            }
        }

        let counters: Vec<CounterAnimator> = content
            .stats
            .iter()
            .map(|stat| CounterAnimator::new(stat.spec.clone()))
            .collect();
        let mut counter_observer = ViewportObserver::new();
        for i in 0..counters.len() {
            counter_observer.register(i, ObserveConfig::default());
        }

        let carousel = CarouselCursor::new(content.testimonials.len());

        Self {
            config,
            content,
            theme,
            mode: Mode::Normal,
            scroll: 0,
            viewport_height: 0,
            should_quit: false,
            status_message: None,
            pending_key: None,
            counters,
            carousel,
            reveals: vec![RevealState::new(); SECTIONS.len()],
            section_observer,
            counter_observer,
            section_heights: Vec::new(),
            total_height: 0,
        }
    }

    /// Record the page geometry measured while drawing and clamp the scroll
    /// position against it.
    pub fn set_page_geometry(&mut self, heights: Vec<u16>, viewport: u16) {
        self.total_height = heights.iter().map(|h| *h as u32).sum::<u32>().min(u16::MAX as u32) as u16;
        self.section_heights = heights;
        self.viewport_height = viewport;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Largest valid scroll offset for the current geometry
    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    /// Page row each section starts at, parallel to `SECTIONS`
    fn section_tops(&self) -> Vec<u16> {
        let mut tops = Vec::with_capacity(self.section_heights.len());
        let mut y = 0u16;
        for height in &self.section_heights {
            tops.push(y);
            y = y.saturating_add(*height);
        }
        tops
    }

    /// Run one visibility recomputation against the last measured geometry.
    ///
    /// Newly visible sections flip their entrance flag; newly visible
    /// counters get their one animation trigger.
    pub fn observe_visibility(&mut self, now: Instant) {
        if self.section_heights.len() != SECTIONS.len() || self.viewport_height == 0 {
            return;
        }
        let tops = self.section_tops();
        let heights = self.section_heights.clone();
        let scroll = self.scroll;
        let viewport = self.viewport_height;

        let revealed = self.section_observer.sweep(|id| {
            let i = id.index();
            visible_fraction(tops[i], heights[i], scroll, viewport)
        });
        for id in revealed {
            self.reveals[id.index()].on_visible();
            debug!(section = id.title(), "section revealed");
        }

        // Counters are single rows inside the stats section
        let stats_top = tops[SectionId::Stats.index()];
        let triggered = self.counter_observer.sweep(|i| {
            let row = stats_top.saturating_add(StatsWidget::stat_row(*i));
            visible_fraction(row, 1, scroll, viewport)
        });
        for i in triggered {
            if let Some(counter) = self.counters.get_mut(i) {
                counter.trigger(now);
                debug!(counter = i, "counter animation started");
            }
        }
    }

    /// Advance all counter animations to `now`
    pub fn tick_counters(&mut self, now: Instant) {
        for counter in &mut self.counters {
            counter.update(now);
        }
    }

    /// Whether the event loop should run at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.counters.iter().any(|c| c.is_animating())
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reveals[id.index()].is_revealed()
    }

    /// The section at the top of the viewport
    pub fn current_section(&self) -> SectionId {
        let tops = self.section_tops();
        let mut current = SectionId::Hero;
        for (i, top) in tops.iter().enumerate() {
            if *top <= self.scroll {
                current = SECTIONS[i];
            }
        }
        current
    }

    // Scrolling

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_half_page_down(&mut self) {
        let half = (self.viewport_height / 2).max(1);
        self.scroll = self.scroll.saturating_add(half).min(self.max_scroll());
    }

    pub fn scroll_half_page_up(&mut self) {
        let half = (self.viewport_height / 2).max(1);
        self.scroll = self.scroll.saturating_sub(half);
    }

    pub fn jump_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll = u16::MAX; // Will be clamped against the next measured geometry
    }

    // Testimonial carousel

    pub fn next_testimonial(&mut self) {
        self.carousel.advance();
    }

    pub fn prev_testimonial(&mut self) {
        self.carousel.retreat();
    }

    /// Flip the display preference, reload the palette and persist the choice
    pub fn toggle_theme(&mut self) {
        self.config.ui.theme = self.config.ui.theme.toggle();
        self.theme = themes::load_theme(self.config.ui.theme);

        let label = self.config.ui.theme.as_str();
        match self.config.save() {
            Ok(()) => self.set_status(format!("Theme: {label}")),
            Err(e) => {
                warn!("failed to persist theme preference: {e}");
                self.set_status(format!("Theme: {label} (preference not saved)"));
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
