//! Home screen: owner profile, summary, and social links.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::PROFILE;
use crate::ui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let profile = &*PROFILE;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        profile.name.clone(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        profile.email.clone(),
        Style::default().fg(palette.dim),
    )));
    lines.push(Line::default());

    for paragraph in profile.summary_paragraphs() {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(palette.fg),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        profile.call_to_action.clone(),
        Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());

    for social in &profile.social_links {
        let key = match social.name.as_str() {
            "GitHub" => "[g] ",
            "LinkedIn" => "[l] ",
            _ => "    ",
        };
        lines.push(Line::from(vec![
            Span::styled(key, Style::default().fg(palette.dim)),
            Span::styled(
                social.name.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                social.url.clone(),
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
