//! Markdown-to-markup conversion for terminal display.
//!
//! Converts a markdown string to styled ratatui [`Line`]s via pulldown-cmark.
//! Handles headings, bold, italic, inline code, fenced code blocks, list
//! items, and links; link destinations are collected so the shell can offer
//! to open them. Arbitrary or malformed input renders without panicking.

mod styles;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Palette;

/// The converted markup: display lines plus collected link destinations.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<String>,
}

impl Rendered {
    /// Plain-text view of the rendered lines, one string per line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }
}

/// Convert markdown text to styled terminal markup.
pub fn render_markdown(text: &str, palette: &Palette) -> Rendered {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::new(palette);
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// Event-walk state for one conversion.
struct Renderer<'p> {
    palette: &'p Palette,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    links: Vec<String>,
    /// Innermost style wins; base style at the bottom
    style_stack: Vec<Style>,
    in_code_block: bool,
}

impl<'p> Renderer<'p> {
    fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            lines: Vec::new(),
            spans: Vec::new(),
            links: Vec::new(),
            style_stack: vec![styles::body(palette)],
            in_code_block: false,
        }
    }

    fn current_style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    /// Blank separator before a new block, unless at the very top.
    fn block_break(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                self.spans.push(Span::styled(
                    code.to_string(),
                    styles::inline_code(self.palette),
                ));
            }
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.block_break();
                self.spans.push(Span::styled(
                    "\u{2500}".repeat(40),
                    Style::default().fg(self.palette.dim),
                ));
                self.flush_line();
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { .. } => {
                self.block_break();
                self.style_stack.push(styles::heading(self.palette));
            }
            Tag::Paragraph => self.block_break(),
            Tag::CodeBlock(_) => {
                self.block_break();
                self.in_code_block = true;
                self.style_stack.push(styles::code_block(self.palette));
            }
            Tag::Strong => {
                let style = self.current_style().add_modifier(Modifier::BOLD);
                self.style_stack.push(style);
            }
            Tag::Emphasis => {
                let style = self.current_style().add_modifier(Modifier::ITALIC);
                self.style_stack.push(style);
            }
            Tag::Item => {
                self.flush_line();
                let style = self.current_style();
                self.spans.push(Span::styled("\u{2022} ".to_string(), style));
            }
            Tag::Link { dest_url, .. } => {
                self.links.push(dest_url.to_string());
                self.style_stack.push(styles::link(self.palette));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::CodeBlock => {
                self.flush_line();
                self.style_stack.pop();
                self.in_code_block = false;
            }
            TagEnd::Paragraph | TagEnd::Item => self.flush_line(),
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link => {
                self.style_stack.pop();
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        let style = self.current_style();
        if self.in_code_block {
            // Preserve whitespace; every newline starts a fresh Line so code
            // keeps its shape.
            let mut first = true;
            for part in text.split('\n') {
                if !first {
                    self.lines.push(Line::from(std::mem::take(&mut self.spans)));
                }
                if !part.is_empty() {
                    self.spans.push(Span::styled(part.to_string(), style));
                }
                first = false;
            }
        } else if !text.is_empty() {
            self.spans.push(Span::styled(text.to_string(), style));
        }
    }

    fn finish(mut self) -> Rendered {
        self.flush_line();
        Rendered {
            lines: self.lines,
            links: self.links,
        }
    }
}
