use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::text_input::TextInput;
use crate::ui::theme::Theme;

/// Bordered, wrapping view of a [`TextInput`] with a block cursor when focused.
pub struct TextField<'a> {
    input: &'a TextInput,
    title: String,
    status: Option<(String, bool)>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(input: &'a TextInput, title: String, focused: bool, theme: &'a Theme) -> Self {
        Self {
            input,
            title,
            status: None,
            focused,
            theme,
        }
    }

    /// Bottom-right note; `ok = false` draws it as a warning.
    pub fn status(mut self, text: String, ok: bool) -> Self {
        self.status = Some((text, ok));
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }));
        if let Some((text, ok)) = &self.status {
            let color = if *ok { colors.muted() } else { colors.warning() };
            block = block.title_bottom(
                Line::from(Span::styled(format!(" {text} "), Style::default().fg(color)))
                    .right_aligned(),
            );
        }

        let text_style = Style::default().fg(colors.fg());
        let cursor_style = Style::default()
            .fg(colors.bg())
            .bg(colors.accent())
            .add_modifier(Modifier::BOLD);

        // Spans can't contain line breaks, so build one Line per text line and
        // place the cursor in whichever line holds it.
        let (before, at, after) = self.input.render_parts();
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();

        push_text(before, text_style, &mut lines, &mut current);
        match at {
            Some('\n') if self.focused => {
                current.push(Span::styled(" ", cursor_style));
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            Some(ch) if self.focused => current.push(Span::styled(ch.to_string(), cursor_style)),
            None if self.focused => current.push(Span::styled(" ", cursor_style)),
            Some(ch) => push_text(&ch.to_string(), text_style, &mut lines, &mut current),
            None => {}
        }
        push_text(after, text_style, &mut lines, &mut current);
        lines.push(Line::from(current));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

fn push_text(
    text: &str,
    style: Style,
    lines: &mut Vec<Line<'static>>,
    current: &mut Vec<Span<'static>>,
) {
    let mut parts = text.split('\n').peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            current.push(Span::styled(part.to_string(), style));
        }
        if parts.peek().is_some() {
            lines.push(Line::from(std::mem::take(current)));
        }
    }
}
