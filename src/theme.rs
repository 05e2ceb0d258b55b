//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Ticker input field
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const LOADING: Color = palette::ORANGE;
    pub const COMMITTED: Color = palette::GREEN;
}

/// Results panel below the input
pub mod panel {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const SCROLLBAR: Color = palette::CYAN;

    pub const SYMBOL: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const NAME: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const KIND_STOCK: Color = palette::CYAN;
    pub const KIND_CRYPTO: Color = palette::PINK;
    pub const KIND_OTHER: Color = palette::TEXT_MUTED;

    pub const HIGHLIGHT_BG: Color = palette::BG_HIGHLIGHT;
    pub const HIGHLIGHT_MARKER: Color = palette::PINK;

    pub const NO_RESULTS: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
}

/// Bottom help/status line
pub mod status {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::WARNING;
}
