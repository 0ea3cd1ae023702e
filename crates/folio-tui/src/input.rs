use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextTestimonial,
    PrevTestimonial,
    ToggleTheme,
    OpenSocial(usize), // Open the nth social link in the browser
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key leaves the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // 'gg' two-key sequence
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    // Digits open social links (1-based, not configurable)
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers == KeyModifiers::NONE {
            return Action::OpenSocial(c as usize - '1' as usize);
        }
    }

    if let Some(action) = keymap.get(&binding) {
        return action.clone();
    }

    // Shifted characters arrive with the SHIFT modifier set; retry without
    // it so bindings written as plain "?" still match.
    if matches!(key.code, KeyCode::Char(_)) && key.modifiers == KeyModifiers::SHIFT {
        if let Some(action) = keymap.get(&KeyBinding::simple(key.code)) {
            return action.clone();
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, PortfolioContent};

    use crate::theme::Theme;

    fn test_app() -> App {
        App::new(
            AppConfig::default(),
            PortfolioContent::default(),
            Theme::default(),
        )
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_basic_bindings() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE), &app, &keymap),
            Action::NextTestimonial
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_shifted_char_falls_back_to_plain_binding() {
        let app = test_app();
        let keymap = Keymap::default();

        // '?' typically arrives with SHIFT set
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT), &app, &keymap),
            Action::Help
        );
        // 'G' is bound with SHIFT directly
        assert_eq!(
            handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT), &app, &keymap),
            Action::JumpToBottom
        );
    }

    #[test]
    fn test_digits_open_social_links() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE), &app, &keymap),
            Action::OpenSocial(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3'), KeyModifiers::NONE), &app, &keymap),
            Action::OpenSocial(2)
        );
    }

    #[test]
    fn test_any_key_exits_help() {
        let mut app = test_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }
}
