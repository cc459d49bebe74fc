//! UI rendering for the portfolio browser.
//!
//! A navigation shell (header + footer hints) frames three screens: Home,
//! Portfolio, and Project. Every widget reads its colors from the palette
//! derived from the display preference, so toggling the theme restyles the
//! whole frame on the next draw.

mod header;
pub mod helpers;
mod home;
mod portfolio;
mod project;
pub mod theme;

pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

/// Render the full frame for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();

    // Root background reflects the display preference.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header (name/tabs + rule)
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Keybind hints
        ])
        .margin(1)
        .split(area);

    header::render(frame, chunks[0], app, &palette);

    match app.screen {
        Screen::Home => home::render(frame, chunks[1], &palette),
        Screen::Portfolio => portfolio::render(frame, chunks[1], app, &palette),
        Screen::Project => project::render(frame, chunks[1], app, &palette),
    }

    let hints = match app.screen {
        Screen::Home => "p portfolio \u{b7} t theme \u{b7} g/l links \u{b7} q quit",
        Screen::Portfolio => {
            "\u{2191}\u{2193} select \u{b7} enter open \u{b7} h home \u{b7} t theme \u{b7} q quit"
        }
        Screen::Project => {
            "\u{2191}\u{2193} scroll \u{b7} esc back \u{b7} o open link \u{b7} t theme \u{b7} q quit"
        }
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(footer, chunks[2]);
}
