use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Modal yes/no box drawn over whatever is underneath.
pub struct ConfirmDialog<'a> {
    title: String,
    message: String,
    confirm: String,
    cancel: String,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: String, message: String, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            confirm: String::new(),
            cancel: String::new(),
            theme,
        }
    }

    pub fn actions(mut self, confirm: String, cancel: String) -> Self {
        self.confirm = confirm;
        self.cancel = cancel;
        self
    }

    /// Smallest box that fits the message, centred in `area`.
    pub fn area(&self, area: Rect) -> Rect {
        let actions = format!("{}    {}", self.confirm, self.cancel);
        let content = self
            .message
            .width()
            .max(actions.width())
            .max(self.title.width() + 2);
        let width = u16::try_from(content.saturating_add(6))
            .unwrap_or(u16::MAX)
            .min(area.width);
        let height = 7u16.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let dialog = self.area(area);
        Clear.render(dialog, buf);

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.warning()))
            .style(Style::default().bg(colors.bg()));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(self.confirm.clone(), Style::default().fg(colors.accent())),
                Span::raw("    "),
                Span::styled(self.cancel.clone(), Style::default().fg(colors.muted())),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(dialog, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_fits_message_and_stays_inside() {
        let theme = Theme::default();
        let dialog = ConfirmDialog::new("提示".into(), "确定要终止么？".into(), &theme)
            .actions("[y] 确定".into(), "[n] 取消".into());
        let rect = dialog.area(Rect::new(0, 0, 80, 24));
        assert!(rect.width >= 14 + 6);
        assert_eq!(rect.height, 7);

        let tiny = dialog.area(Rect::new(0, 0, 10, 4));
        assert_eq!((tiny.width, tiny.height), (10, 4));
    }

    #[test]
    fn dialog_counts_emoji_as_two_cells() {
        let theme = Theme::default();
        let dialog = ConfirmDialog::new("T".into(), "\u{1F600}".repeat(5), &theme);
        assert_eq!(dialog.area(Rect::new(0, 0, 80, 24)).width, 16);
    }

    #[test]
    fn very_long_message_is_clamped_to_area() {
        let theme = Theme::default();
        let dialog = ConfirmDialog::new("T".into(), "a".repeat(65_536), &theme);
        let rect = dialog.area(Rect::new(0, 0, 80, 24));
        assert_eq!((rect.x, rect.width), (0, 80));
    }
}
