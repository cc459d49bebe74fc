//! Portfolio screen: the project listing with a selection cursor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::PROJECT_SUMMARIES;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::Palette;

/// Rows used per listing entry (title, description, meta, spacing).
const LINES_PER_ENTRY: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (index, project) in PROJECT_SUMMARIES.iter().enumerate() {
        let selected = index == app.portfolio_index;

        let (marker, title_style) = if selected {
            (
                "\u{25b8} ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  ",
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(project.title.clone(), title_style),
        ]));

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&project.description, width),
                Style::default().fg(palette.dim),
            ),
        ]));

        let mut meta: Vec<Span> = vec![Span::raw("  ")];
        meta.push(Span::styled(
            project.technologies.join(" \u{b7} "),
            Style::default().fg(palette.tag),
        ));
        meta.push(Span::styled(
            format!("   {}", project.date.format("%b %Y")),
            Style::default().fg(palette.dim),
        ));
        lines.push(Line::from(meta));

        lines.push(Line::default());
    }

    // Keep the selected entry in view on short terminals.
    let first_selected_row = (app.portfolio_index * LINES_PER_ENTRY) as u16;
    let visible = area.height;
    let scroll = if first_selected_row + LINES_PER_ENTRY as u16 > visible {
        first_selected_row + LINES_PER_ENTRY as u16 - visible
    } else {
        0
    };

    let widget = Paragraph::new(lines).scroll((scroll, 0));
    frame.render_widget(widget, area);
}
