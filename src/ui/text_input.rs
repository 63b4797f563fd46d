use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Editable text for the quiz source. Multi-line: pasted passages keep their
/// line breaks, and Enter submits rather than inserting a newline.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
}

impl TextInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert `s` at the cursor (used for bracketed paste). Carriage returns
    /// from Windows clipboards are dropped.
    pub fn insert_str(&mut self, s: &str) {
        let cleaned: String = s.chars().filter(|&c| c != '\r').collect();
        let byte_offset = self.char_to_byte(self.cursor);
        self.text.insert_str(byte_offset, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            Some(ch) => {
                let next_byte = byte_offset + ch.len_utf8();
                (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
            }
            None => (&self.text, None, ""),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.remove_char_at(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.text.chars().count() {
                    self.remove_char_at(self.cursor);
                }
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at(&mut self, char_idx: usize) {
        let byte_offset = self.char_to_byte(char_idx);
        if let Some(ch) = self.text[byte_offset..].chars().next() {
            self.text
                .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
        }
    }

    /// Delete word before cursor. Runs of ideographs have no spaces, so a
    /// "word" ends at whitespace or at a switch between ideographic and other
    /// characters.
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        if pos > 0 {
            let ideographic = crate::engine::filter::is_quizzable(chars[pos - 1]);
            while pos > 0
                && !chars[pos - 1].is_whitespace()
                && crate::engine::filter::is_quizzable(chars[pos - 1]) == ideographic
            {
                pos -= 1;
            }
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }
}
