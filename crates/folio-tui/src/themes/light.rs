use ratatui::style::Color;

use crate::theme::Theme;

/// Warm paper-white palette
pub fn theme() -> Theme {
    Theme {
        bg0: Color::Rgb(0xf7, 0xf4, 0xed),
        bg1: Color::Rgb(0xef, 0xea, 0xe0),
        bg2: Color::Rgb(0xe4, 0xde, 0xd2),
        fg0: Color::Rgb(0x33, 0x30, 0x2b),
        fg1: Color::Rgb(0x4f, 0x4a, 0x42),
        muted: Color::Rgb(0x8a, 0x83, 0x76),
        accent: Color::Rgb(0xb5, 0x5e, 0x0f),
        heading: Color::Rgb(0x2f, 0x5d, 0x8c),
        link: Color::Rgb(0x1a, 0x6b, 0x72),
        hidden: Color::Rgb(0xc4, 0xbd, 0xaf),
    }
}
