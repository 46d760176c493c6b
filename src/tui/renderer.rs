//! TUI rendering
//!
//! Header, keyword entry, results table and status area, top to bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::state::TuiState;
use crate::presenter::TABLE_HEADER;

const KEYWORD_LABEL: &str = "  KEYWORD:";

const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Percentage(30),
    Constraint::Length(12),
    Constraint::Percentage(58),
];

pub struct TuiRenderer;

impl TuiRenderer {
    pub fn render(f: &mut Frame, state: &TuiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Keyword entry
                Constraint::Min(1),    // Results
                Constraint::Length(2), // Hint + status bar
            ])
            .split(f.size());

        Self::render_header(f, chunks[0], state);
        Self::render_form(f, chunks[1], state);
        Self::render_results(f, chunks[2], state);
        Self::render_status(f, chunks[3], state);
    }

    fn render_header(f: &mut Frame, area: Rect, state: &TuiState) {
        let header = Paragraph::new(format!(" {}", state.title))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn render_form(f: &mut Frame, area: Rect, state: &TuiState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(KEYWORD_LABEL.len() as u16 + 2),
                Constraint::Min(1),
            ])
            .split(area);

        // Blank first line centers the label against the bordered entry
        let label = Paragraph::new(vec![Line::from(""), Line::from(KEYWORD_LABEL)]);
        f.render_widget(label, chunks[0]);

        let entry = Paragraph::new(Self::entry_text(state))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(entry, chunks[1]);
    }

    /// Entry contents with a block cursor at the cursor position
    fn entry_text(state: &TuiState) -> String {
        let mut chars: Vec<char> = state.query().chars().collect();
        let cursor = state.input.cursor_position().min(chars.len());
        chars.insert(cursor, '█');
        chars.into_iter().collect()
    }

    fn render_results(f: &mut Frame, area: Rect, state: &TuiState) {
        let header = Row::new(TABLE_HEADER.iter().map(|h| Cell::from(*h)))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows = state
            .rows
            .iter()
            .map(|columns| Row::new(columns.iter().map(|c| Cell::from(c.as_str()))));

        let table = Table::new(rows)
            .header(header)
            .block(Block::default().borders(Borders::ALL))
            .widths(&COLUMN_WIDTHS)
            .column_spacing(2)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White));

        let mut table_state = TableState::default();
        if !state.rows.is_empty() {
            table_state.select(Some(state.selected_index));
        }

        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_status(f: &mut Frame, area: Rect, state: &TuiState) {
        let status_style = if state.searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let status = Paragraph::new(vec![
            Line::from(Span::styled(
                state.hint.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(state.status_message.as_str(), status_style)),
        ]);
        f.render_widget(status, area);
    }
}
