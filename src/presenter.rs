//! Publishing search results to the display surface

use crate::parser::MatchRecord;

pub const APP_TITLE: &str = "ggg v1.0";

/// Header row of the results table
pub const TABLE_HEADER: [&str; 3] = ["File Name", "Line Number", "Path"];

/// Status shown before the first search
pub const INITIAL_STATUS: &str = "---";

pub const NOT_FOUND: &str = "Not Found";

/// What the core needs from a terminal front-end
pub trait DisplaySurface {
    fn render_header(&mut self, title: &str);
    fn clear_rows(&mut self);
    fn render_row(&mut self, columns: &[&str]);
    fn set_status(&mut self, text: &str);
}

/// Summary shown after a search
pub fn status_text(row_count: usize) -> String {
    if row_count > 0 {
        format!("Matched {} lines", row_count)
    } else {
        NOT_FOUND.to_string()
    }
}

/// Put a freshly created surface into its startup state.
pub fn initialize<S: DisplaySurface + ?Sized>(surface: &mut S) {
    surface.render_header(APP_TITLE);
    surface.clear_rows();
    surface.set_status(INITIAL_STATUS);
}

/// Replace the displayed rows with `records` and publish the summary.
pub fn present<S: DisplaySurface + ?Sized>(
    records: &[MatchRecord],
    surface: &mut S,
) -> (usize, String) {
    surface.clear_rows();
    for record in records {
        surface.render_row(&record.columns());
    }

    let row_count = records.len();
    let status = status_text(row_count);
    surface.set_status(&status);
    (row_count, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Header(String),
        Clear,
        Row(Vec<String>),
        Status(String),
    }

    /// Records every call in order
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn rows(&self) -> Vec<Vec<String>> {
            let start = self
                .calls
                .iter()
                .rposition(|c| *c == Call::Clear)
                .map_or(0, |i| i + 1);
            self.calls[start..]
                .iter()
                .filter_map(|c| match c {
                    Call::Row(columns) => Some(columns.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn render_header(&mut self, title: &str) {
            self.calls.push(Call::Header(title.to_string()));
        }

        fn clear_rows(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn render_row(&mut self, columns: &[&str]) {
            self.calls
                .push(Call::Row(columns.iter().map(|c| c.to_string()).collect()));
        }

        fn set_status(&mut self, text: &str) {
            self.calls.push(Call::Status(text.to_string()));
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(0), "Not Found");
        assert_eq!(status_text(1), "Matched 1 lines");
        assert_eq!(status_text(42), "Matched 42 lines");
    }

    #[test]
    fn test_initialize() {
        let mut surface = RecordingSurface::default();
        initialize(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                Call::Header("ggg v1.0".to_string()),
                Call::Clear,
                Call::Status("---".to_string()),
            ]
        );
    }

    #[test]
    fn test_present_records() {
        let records = vec![
            MatchRecord::new("x.py", "3", "# TODO fix"),
            MatchRecord::new("y.py", "10", "pass"),
        ];
        let mut surface = RecordingSurface::default();

        let (count, status) = present(&records, &mut surface);
        assert_eq!(count, 2);
        assert_eq!(status, "Matched 2 lines");
        assert_eq!(surface.calls.first(), Some(&Call::Clear));
        assert_eq!(surface.calls.last(), Some(&Call::Status(status)));
        assert_eq!(
            surface.rows(),
            vec![
                vec!["x.py".to_string(), "3".to_string(), "# TODO fix".to_string()],
                vec!["y.py".to_string(), "10".to_string(), "pass".to_string()],
            ]
        );
    }

    #[test]
    fn test_present_empty() {
        let mut surface = RecordingSurface::default();
        let (count, status) = present(&[], &mut surface);
        assert_eq!(count, 0);
        assert_eq!(status, "Not Found");
        assert!(surface.rows().is_empty());
    }

    #[test]
    fn test_present_replaces_previous_rows() {
        let mut surface = RecordingSurface::default();
        present(&[MatchRecord::new("old.rs", "1", "old")], &mut surface);
        present(&[MatchRecord::new("new.rs", "2", "new")], &mut surface);

        assert_eq!(surface.rows().len(), 1);
        assert_eq!(surface.rows()[0][0], "new.rs");
    }

    #[test]
    fn test_present_is_idempotent() {
        let records = vec![MatchRecord::new("a.rs", "1", "x")];
        let mut surface = RecordingSurface::default();

        let first = present(&records, &mut surface);
        let rows_after_first = surface.rows();
        let second = present(&records, &mut surface);

        assert_eq!(first, second);
        assert_eq!(surface.rows(), rows_after_first);
    }
}
