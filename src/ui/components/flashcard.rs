use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::ui::theme::Theme;

/// A single character centred on a card. Terminals can't scale fonts, so the
/// card frame does the work of making the glyph stand out.
pub struct Flashcard<'a> {
    glyph: char,
    dimmed: bool,
    theme: &'a Theme,
}

impl<'a> Flashcard<'a> {
    pub fn new(glyph: char, theme: &'a Theme) -> Self {
        Self {
            glyph,
            dimmed: false,
            theme,
        }
    }

    /// Render muted, e.g. while the stop dialog covers the card.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

/// Card size for `area`: square-looking (cells are about twice as tall as
/// wide), never larger than the area.
pub fn card_rect(area: Rect) -> Rect {
    let height = area.height.min(15).max(3);
    let width = (height * 2 + 2).min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for Flashcard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let card = card_rect(area);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(if self.dimmed {
                colors.border()
            } else {
                colors.accent()
            }))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(card);
        block.render(card, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let x = inner.x + (inner.width - 2) / 2;
        let y = inner.y + inner.height / 2;
        let mut style = Style::default()
            .fg(if self.dimmed { colors.muted() } else { colors.glyph() })
            .bg(colors.card_bg());
        if !self.dimmed {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_string(x, y, self.glyph.to_string(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fits_small_area() {
        let area = Rect::new(0, 0, 6, 2);
        let card = card_rect(area);
        assert!(card.width <= area.width && card.height <= area.height);
    }

    #[test]
    fn card_is_centred() {
        let card = card_rect(Rect::new(0, 0, 80, 30));
        assert_eq!(card, Rect::new(24, 7, 32, 15));
    }

    #[test]
    fn glyph_lands_in_card_centre() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 15);
        let mut buf = Buffer::empty(area);
        Flashcard::new('永', &theme).render(area, &mut buf);

        let card = card_rect(area);
        let inner_x = card.x + 1;
        let inner_w = card.width - 2;
        let x = inner_x + (inner_w - 2) / 2;
        let y = card.y + 1 + (card.height - 2) / 2;
        assert_eq!(buf[(x, y)].symbol(), "永");
    }
}
