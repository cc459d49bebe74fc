//! Navigation shell header.
//!
//! Owner name on the left; Home/Portfolio tabs and the theme-toggle icon on
//! the right, with the active tab highlighted. Rendered on every screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::theme::Palette;

/// Render the two-row header: name/tabs, then a rule.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.height < 2 {
        return;
    }

    let name = Paragraph::new(Line::from(Span::styled(
        crate::models::OWNER_NAME,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(name, Rect { height: 1, ..area });

    // Tabs hide on very narrow terminals rather than colliding with the name.
    if area.width >= 40 {
        let tabs = Paragraph::new(tab_line(app, palette)).alignment(Alignment::Right);
        frame.render_widget(tabs, Rect { height: 1, ..area });
    }

    let rule = Paragraph::new(Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(
        rule,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn tab_line(app: &App, palette: &Palette) -> Line<'static> {
    let tab_style = |active: bool| {
        if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.dim)
        }
    };

    Line::from(vec![
        Span::styled("Home", tab_style(app.screen == Screen::Home)),
        Span::raw("  "),
        Span::styled(
            "Portfolio",
            tab_style(matches!(app.screen, Screen::Portfolio | Screen::Project)),
        ),
        Span::raw("  "),
        Span::styled(
            app.theme.icon().to_string(),
            Style::default().fg(palette.accent),
        ),
    ])
}
