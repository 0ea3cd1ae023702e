use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use folio_core::{AppConfig, PortfolioContent};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{HeaderWidget, HelpWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, content: PortfolioContent) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(config.ui.theme);

    // Create app state
    let mut app = App::new(config, content, theme);

    // Track if we need the animation frame rate for running counters.
    // This is checked at the END of each iteration to determine the NEXT
    // iteration's poll timeout.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        let now = Instant::now();

        // Advance counter animations before drawing their values
        app.tick_counters(now);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: header + page + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            // The page measures its geometry while rendering; draw it first
            // so the header and status bar see clamped scroll state.
            PageWidget::render(frame, main_layout[1], &mut app);
            HeaderWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[2], &app);

            // Render the help overlay on top
            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app);
            }
        })?;

        // One visibility recomputation against the geometry just measured
        app.observe_visibility(now);

        // Handle events (use faster tick rate while counters animate)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Geometry is remeasured on every draw
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextTestimonial => app.next_testimonial(),
        Action::PrevTestimonial => app.prev_testimonial(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::OpenSocial(index) => open_social(app, index),
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}

fn open_social(app: &mut App, index: usize) {
    let Some(social) = app.content.socials.get(index).cloned() else {
        return;
    };
    if let Err(e) = open::that(&social.url) {
        app.set_status(format!("Failed to open {}: {}", social.label, e));
    } else {
        app.set_status(format!("Opening {}...", social.label));
    }
}
