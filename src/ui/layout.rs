use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Header bar, body and a one-line hint footer.
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            body: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Split the main screen body into the lesson browser (top) and text field.
/// Short terminals give the text field at least five rows.
pub fn main_screen_split(body: Rect) -> (Rect, Rect) {
    let editor_rows = if body.height < 16 { 5 } else { body.height * 2 / 5 };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(editor_rows)])
        .split(body);
    (parts[0], parts[1])
}

/// Join key hints into as few lines as fit `width` (counted in terminal cells).
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.width() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 36;
    const MIN_POPUP_HEIGHT: u16 = 7;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup, area);
    }

    #[test]
    fn centered_rect_is_centered() {
        let popup = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn hints_measure_rare_ideographs_and_combining_marks() {
        // U+20000 takes two cells, a combining acute takes none
        let hints = ["\u{20000}\u{20001}", "e\u{301}"];
        assert_eq!(
            pack_hint_lines(&hints, 7),
            vec![" \u{20000}\u{20001}".to_string(), " e\u{301}".to_string()]
        );
        assert_eq!(
            pack_hint_lines(&hints, 8),
            vec![" \u{20000}\u{20001}  e\u{301}".to_string()]
        );
    }

    #[test]
    fn hints_wrap_by_cell_width() {
        let lines = pack_hint_lines(&["[Tab] 切换", "[Enter] 开始"], 16);
        assert_eq!(lines, vec![" [Tab] 切换".to_string(), " [Enter] 开始".to_string()]);

        let wide = pack_hint_lines(&["[Tab] 切换", "[Enter] 开始"], 80);
        assert_eq!(wide.len(), 1);
    }

    #[test]
    fn main_split_keeps_editor_visible() {
        let (browser, editor) = main_screen_split(Rect::new(0, 0, 80, 10));
        assert_eq!(editor.height, 5);
        assert_eq!(browser.height, 5);
    }
}
