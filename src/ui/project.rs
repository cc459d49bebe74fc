//! Project detail screen.
//!
//! Shows a loading indicator while the fetch is in flight, then the converted
//! markup or a placeholder. Content scrolls with the arrow keys.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::loader::LoadedContent;
use crate::markdown::render_markdown;
use crate::ui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if app.project.is_loading {
        let widget = Paragraph::new(Line::from(Span::styled(
            "Loading project\u{2026}",
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = match &app.project.content {
        Some(LoadedContent::Markdown(markdown)) => render_markdown(markdown, palette).lines,
        Some(LoadedContent::Placeholder(text)) => vec![Line::from(Span::styled(
            (*text).to_string(),
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        ))],
        None => Vec::new(),
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.project.scroll, 0));
    frame.render_widget(widget, area);
}
