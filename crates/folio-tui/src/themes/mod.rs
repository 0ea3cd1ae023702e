//! Theme palettes and loader
//!
//! Two palettes, one per display preference value.

mod dark;
mod light;

use folio_core::config::ThemeMode;

use crate::theme::Theme;

/// Resolve the persisted display preference to a palette
pub fn load_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light::theme(),
        ThemeMode::Dark => dark::theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_theme_both_modes() {
        let light = load_theme(ThemeMode::Light);
        let dark = load_theme(ThemeMode::Dark);
        assert_ne!(format!("{:?}", light.bg0), format!("{:?}", dark.bg0));
        assert_ne!(format!("{:?}", light.fg0), format!("{:?}", dark.fg0));
    }

    #[test]
    fn test_default_theme_is_light() {
        let default = Theme::default();
        let light = load_theme(ThemeMode::Light);
        assert_eq!(format!("{:?}", default.bg0), format!("{:?}", light.bg0));
    }
}
