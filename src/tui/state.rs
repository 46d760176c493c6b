//! UI state for the TUI application
//!
//! Holds only state, no rendering logic. `TuiState` is the display surface
//! the presenter writes into.

use super::input::{EditableText, InputOperation};
use crate::path::BaseDirectory;
use crate::presenter::DisplaySurface;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const SEARCHING_STATUS: &str = "Searching...";

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct TuiState {
    pub title: String,
    /// Line above the status bar
    pub hint: String,
    pub input: EditableText,
    pub rows: Vec<Vec<String>>,
    pub selected_index: usize,
    pub status_message: String,
    pub searching: bool,
    pub should_quit: bool,
}

/// Actions the event loop carries out after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiAction {
    Submit(String),
    Quit,
}

impl TuiState {
    pub fn new(base_dir: &BaseDirectory) -> Self {
        Self {
            title: String::new(),
            hint: format!("Press Esc 'Quit' / Walk from [{}]", base_dir),
            input: EditableText::new(),
            rows: Vec::new(),
            selected_index: 0,
            status_message: String::new(),
            searching: false,
            should_quit: false,
        }
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    /// Mark a search as running until its result is applied.
    pub fn begin_search(&mut self) {
        self.searching = true;
        self.status_message = SEARCHING_STATUS.to_string();
    }

    pub fn select_next(&mut self, step: usize) {
        let last = self.rows.len().saturating_sub(1);
        self.selected_index = (self.selected_index + step).min(last);
    }

    pub fn select_previous(&mut self, step: usize) {
        self.selected_index = self.selected_index.saturating_sub(step);
    }

    /// Handle a key press and report what the event loop should do.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TuiAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let operation = match key.code {
            KeyCode::Esc => return Some(self.quit()),
            KeyCode::Char('c') if ctrl => return Some(self.quit()),
            KeyCode::Enter => return Some(TuiAction::Submit(self.query().to_string())),
            KeyCode::Up => {
                self.select_previous(1);
                return None;
            }
            KeyCode::Down => {
                self.select_next(1);
                return None;
            }
            KeyCode::PageUp => {
                self.select_previous(PAGE_SIZE);
                return None;
            }
            KeyCode::PageDown => {
                self.select_next(PAGE_SIZE);
                return None;
            }
            KeyCode::Char('a') if ctrl => InputOperation::MoveCursorToStart,
            KeyCode::Char('e') if ctrl => InputOperation::MoveCursorToEnd,
            KeyCode::Char('b') if ctrl => InputOperation::MoveCursorLeft,
            KeyCode::Char('f') if ctrl => InputOperation::MoveCursorRight,
            KeyCode::Char('d') if ctrl => InputOperation::DeleteCharForward,
            KeyCode::Char('h') if ctrl => InputOperation::DeleteCharBackward,
            KeyCode::Char('k') if ctrl => InputOperation::KillLine,
            KeyCode::Char('y') if ctrl => InputOperation::Yank,
            KeyCode::Char(_) if ctrl => return None,
            KeyCode::Char(c) => InputOperation::InsertChar(c),
            KeyCode::Home => InputOperation::MoveCursorToStart,
            KeyCode::End => InputOperation::MoveCursorToEnd,
            KeyCode::Left => InputOperation::MoveCursorLeft,
            KeyCode::Right => InputOperation::MoveCursorRight,
            KeyCode::Delete => InputOperation::DeleteCharForward,
            KeyCode::Backspace => InputOperation::DeleteCharBackward,
            _ => return None,
        };

        self.input.apply(operation);
        None
    }

    fn quit(&mut self) -> TuiAction {
        self.should_quit = true;
        TuiAction::Quit
    }
}

impl DisplaySurface for TuiState {
    fn render_header(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
        self.selected_index = 0;
    }

    fn render_row(&mut self, columns: &[&str]) {
        self.rows.push(columns.iter().map(|c| c.to_string()).collect());
    }

    fn set_status(&mut self, text: &str) {
        self.searching = false;
        self.status_message = text.to_string();
    }
}
