use ratatui::style::Color;

use crate::theme::Theme;

/// Muted slate palette
pub fn theme() -> Theme {
    Theme {
        bg0: Color::Rgb(0x1d, 0x20, 0x21),
        bg1: Color::Rgb(0x28, 0x2c, 0x2e),
        bg2: Color::Rgb(0x32, 0x38, 0x3a),
        fg0: Color::Rgb(0xd4, 0xd0, 0xc8),
        fg1: Color::Rgb(0xb8, 0xb3, 0xa9),
        muted: Color::Rgb(0x7f, 0x84, 0x88),
        accent: Color::Rgb(0xe7, 0x8a, 0x4e),
        heading: Color::Rgb(0x7d, 0xae, 0xa3),
        link: Color::Rgb(0x89, 0xb4, 0x82),
        hidden: Color::Rgb(0x4a, 0x50, 0x54),
    }
}
