use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Value storage and cursor for a single-line input.
///
/// The cursor is a char index into the buffer; column arithmetic for
/// rendering goes through `unicode-width` so wide glyphs line up.
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Char index of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, in terminal cells.
    pub fn cursor_column(&self) -> u16 {
        let byte = self.byte_index(self.cursor);
        self.text[..byte].width() as u16
    }

    /// Replace the whole value, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Apply one key event. Returns `true` when the event was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.insert(ch);
                true
            }
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Delete => self.delete_at(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                true
            }
            _ => false,
        }
    }

    fn insert(&mut self, ch: char) {
        let byte = self.byte_index(self.cursor);
        self.text.insert(byte, ch);
        self.cursor += 1;
    }

    fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = self.byte_index(self.cursor - 1);
        self.text.remove(byte);
        self.cursor -= 1;
        true
    }

    fn delete_at(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let byte = self.byte_index(self.cursor);
        self.text.remove(byte);
        true
    }

    fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn move_right(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
