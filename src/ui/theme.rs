//! Color palettes for the two display modes.
//!
//! Every view reads its colors from the active [`Palette`], which is derived
//! from the display preference on each frame. This is the TUI equivalent of
//! a `data-theme` attribute on the document root.

use ratatui::style::Color;

/// The full color scheme derived from the display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Root background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Highlights: active tab, selected row, owner name
    pub accent: Color,
    /// Secondary text: descriptions, hints, dates
    pub dim: Color,
    /// Markdown headings
    pub heading: Color,
    /// Inline code and code blocks
    pub code: Color,
    /// Hyperlinks
    pub link: Color,
    /// Technology tags in the listing
    pub tag: Color,
}

impl Palette {
    /// Light scheme: dark ink on a warm paper background.
    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 249, 245),
            fg: Color::Rgb(42, 42, 46),
            accent: Color::Rgb(13, 110, 253),
            dim: Color::Rgb(110, 110, 118),
            heading: Color::Rgb(8, 76, 176),
            code: Color::Rgb(140, 60, 120),
            link: Color::Rgb(13, 110, 253),
            tag: Color::Rgb(22, 120, 90),
        }
    }

    /// Dark scheme: soft grays on near-black.
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(18, 18, 24),
            fg: Color::Rgb(214, 214, 220),
            accent: Color::Rgb(96, 165, 250),
            dim: Color::Rgb(128, 128, 138),
            heading: Color::Rgb(125, 196, 255),
            code: Color::Rgb(222, 150, 200),
            link: Color::Rgb(96, 165, 250),
            tag: Color::Rgb(92, 200, 160),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_are_distinct() {
        assert_ne!(Palette::light(), Palette::dark());
        assert_ne!(Palette::light().bg, Palette::dark().bg);
        assert_ne!(Palette::light().fg, Palette::dark().fg);
    }
}
