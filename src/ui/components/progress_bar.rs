use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::session::quiz::Progress;
use crate::ui::theme::Theme;

/// How far through the working set the quiz is, with a `current/total` label.
pub struct ProgressBar<'a> {
    pub progress: Progress,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: Progress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered().border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.progress.ratio().clamp(0.0, 1.0);
        let filled_width = (ratio * inner.width as f64).round() as u16;
        let label = format!("{}/{}", self.progress.current, self.progress.total);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}
