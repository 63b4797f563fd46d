use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

pub struct CompletionPanel<'a> {
    total: usize,
    elapsed: Option<Duration>,
    theme: &'a Theme,
}

impl<'a> CompletionPanel<'a> {
    pub fn new(total: usize, elapsed: Option<Duration>, theme: &'a Theme) -> Self {
        Self {
            total,
            elapsed,
            theme,
        }
    }
}

impl Widget for CompletionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let panel = Style::default().bg(colors.celebrate_bg()).fg(colors.celebrate_fg());

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(panel)
            .style(panel);

        let total = self.total.to_string();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                t!("complete.message", total = total.as_str()).to_string(),
                panel.add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(elapsed) = self.elapsed {
            let seconds = elapsed.as_secs().to_string();
            lines.push(Line::from(Span::styled(
                t!("complete.elapsed", seconds = seconds.as_str()).to_string(),
                panel,
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(t!("complete.return").to_string(), panel),
            Span::styled("    ", panel),
            Span::styled(
                t!("complete.restart").to_string(),
                panel.add_modifier(Modifier::BOLD),
            ),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
