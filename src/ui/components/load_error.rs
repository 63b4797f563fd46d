use std::error::Error;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::error::DataLoadError;
use crate::ui::theme::Theme;

/// Blocking screen shown when the lesson dataset fails to load.
pub struct LoadErrorPanel<'a> {
    error: &'a DataLoadError,
    theme: &'a Theme,
}

impl<'a> LoadErrorPanel<'a> {
    pub fn new(error: &'a DataLoadError, theme: &'a Theme) -> Self {
        Self { error, theme }
    }
}

impl Widget for LoadErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", t!("error.title")))
            .border_style(Style::default().fg(colors.error()));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.error.to_string(),
                Style::default().fg(colors.error()).add_modifier(Modifier::BOLD),
            )),
        ];
        let mut source = self.error.source();
        while let Some(cause) = source {
            lines.push(Line::from(Span::styled(
                format!("  {cause}"),
                Style::default().fg(colors.muted()),
            )));
            source = cause.source();
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t!("error.quit").to_string(),
            Style::default().fg(colors.muted()),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
