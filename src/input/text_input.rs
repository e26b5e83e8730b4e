use crate::core::field::FieldId;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The value changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    Ignored,
}

/// Single-line edit buffer for one field. The cursor counts chars, not bytes.
#[derive(Debug, Clone)]
pub struct TextInput {
    field: FieldId,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor_pos
    }

    /// Display columns between the start of the value and the cursor.
    pub fn cursor_width(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let word = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(ch);
                KeyResult::Changed
            }
            KeyCode::Backspace => changed_if(self.backspace()),
            KeyCode::Delete => changed_if(self.delete()),
            KeyCode::Left if word => moved_if(self.move_word_left()),
            KeyCode::Right if word => moved_if(self.move_word_right()),
            KeyCode::Left => moved_if(self.move_left()),
            KeyCode::Right => moved_if(self.move_right()),
            KeyCode::Home => moved_if(self.move_home()),
            KeyCode::End => moved_if(self.move_end()),
            _ => KeyResult::Ignored,
        }
    }

    pub fn delete_word(&mut self) -> KeyResult {
        if self.cursor_pos == 0 {
            return KeyResult::Ignored;
        }

        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
        KeyResult::Changed
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.value.chars().count() {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.remove(byte_pos);
        true
    }

    fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    fn move_word_left(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }

        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| is_separator(*c)) {
            pos -= 1;
        }

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
        true
    }

    fn move_word_right(&mut self) -> bool {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| is_separator(*c)) {
            pos += 1;
        }

        while pos < chars.len() && chars.get(pos).is_some_and(|c| !is_separator(*c)) {
            pos += 1;
        }

        if pos == self.cursor_pos {
            false
        } else {
            self.cursor_pos = pos;
            true
        }
    }

    fn move_home(&mut self) -> bool {
        let moved = self.cursor_pos != 0;
        self.cursor_pos = 0;
        moved
    }

    fn move_end(&mut self) -> bool {
        let end = self.value.chars().count();
        let moved = self.cursor_pos != end;
        self.cursor_pos = end;
        moved
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
}

fn changed_if(changed: bool) -> KeyResult {
    if changed { KeyResult::Changed } else { KeyResult::Ignored }
}

fn moved_if(moved: bool) -> KeyResult {
    if moved { KeyResult::Moved } else { KeyResult::Ignored }
}
