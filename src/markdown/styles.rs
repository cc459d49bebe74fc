//! Style derivation for markdown rendering.
//!
//! Styles are pure functions of the active palette so rendered markup always
//! reflects the current display preference.

use ratatui::style::{Modifier, Style};

use crate::ui::theme::Palette;

/// Style for headings.
pub fn heading(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.heading)
        .add_modifier(Modifier::BOLD)
}

/// Style for fenced code blocks.
pub fn code_block(palette: &Palette) -> Style {
    Style::default().fg(palette.code)
}

/// Style for inline code.
pub fn inline_code(palette: &Palette) -> Style {
    Style::default().fg(palette.code)
}

/// Style for links.
pub fn link(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.link)
        .add_modifier(Modifier::UNDERLINED)
}

/// Base text style.
pub fn body(palette: &Palette) -> Style {
    Style::default().fg(palette.fg)
}
