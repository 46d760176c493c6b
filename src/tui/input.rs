//! Keyword entry editing
//!
//! Emacs-style line editing for the single-line entry. The cursor is a
//! character index, so multi-byte input edits cleanly.

/// Input operations for the keyword entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOperation {
    InsertChar(char),
    MoveCursorToStart,
    MoveCursorToEnd,
    MoveCursorLeft,
    MoveCursorRight,
    DeleteCharForward,
    DeleteCharBackward,
    KillLine,
    Yank,
}

/// Byte offset of the `char_pos`-th character
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Editable single-line text with a cursor and a one-entry kill ring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableText {
    text: String,
    cursor_position: usize,
    kill_ring: String,
}

impl EditableText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn apply(&mut self, operation: InputOperation) {
        let len = self.text.chars().count();
        match operation {
            InputOperation::InsertChar(c) => {
                let at = byte_index(&self.text, self.cursor_position);
                self.text.insert(at, c);
                self.cursor_position += 1;
            }
            InputOperation::MoveCursorToStart => {
                self.cursor_position = 0;
            }
            InputOperation::MoveCursorToEnd => {
                self.cursor_position = len;
            }
            InputOperation::MoveCursorLeft => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            InputOperation::MoveCursorRight => {
                if self.cursor_position < len {
                    self.cursor_position += 1;
                }
            }
            InputOperation::DeleteCharForward => {
                if self.cursor_position < len {
                    let at = byte_index(&self.text, self.cursor_position);
                    self.text.remove(at);
                }
            }
            InputOperation::DeleteCharBackward => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let at = byte_index(&self.text, self.cursor_position);
                    self.text.remove(at);
                }
            }
            InputOperation::KillLine => {
                if self.cursor_position < len {
                    let at = byte_index(&self.text, self.cursor_position);
                    self.kill_ring = self.text.split_off(at);
                }
            }
            InputOperation::Yank => {
                if !self.kill_ring.is_empty() {
                    let at = byte_index(&self.text, self.cursor_position);
                    self.text.insert_str(at, &self.kill_ring);
                    self.cursor_position += self.kill_ring.chars().count();
                }
            }
        }
    }
}
