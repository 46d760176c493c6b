//! Parsing of `git grep -n` output
//!
//! Each match is printed as `file:line:content`. Fragments that do not split
//! into exactly three colon-delimited chunks are dropped without error.

/// Separator between the fields of one match
pub const FIELD_SEPARATOR: char = ':';

const FIELD_COUNT: usize = 3;

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub file_name: String,
    /// Kept verbatim, never parsed as an integer
    pub line_number: String,
    pub path: String,
}

impl MatchRecord {
    pub fn new(
        file_name: impl Into<String>,
        line_number: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line_number: line_number.into(),
            path: path.into(),
        }
    }

    /// Table columns in display order
    pub fn columns(&self) -> [&str; 3] {
        [
            self.file_name.as_str(),
            self.line_number.as_str(),
            self.path.as_str(),
        ]
    }
}

/// How raw output is cut into candidate fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// One fragment per output line
    #[default]
    Newline,
    /// Split on single spaces. Multi-word content is fragmented and mostly
    /// discarded; kept for compatibility with the first release of ggg.
    Space,
}

/// Parse raw tool output split on newlines.
pub fn parse_lines(raw: &str) -> Vec<MatchRecord> {
    parse_lines_with(raw, Delimiter::Newline)
}

pub fn parse_lines_with(raw: &str, delimiter: Delimiter) -> Vec<MatchRecord> {
    let records: Vec<MatchRecord> = match delimiter {
        Delimiter::Newline => raw.lines().filter_map(parse_fragment).collect(),
        Delimiter::Space => raw.split(' ').filter_map(parse_fragment).collect(),
    };
    log::debug!(
        "Parsed {} records from {} bytes of output ({:?})",
        records.len(),
        raw.len(),
        delimiter
    );
    records
}

/// Decode a single fragment, or `None` if it is not `file:line:path`.
pub fn parse_fragment(fragment: &str) -> Option<MatchRecord> {
    let chunks: Vec<&str> = fragment.split(FIELD_SEPARATOR).collect();
    if chunks.len() != FIELD_COUNT {
        log::trace!("Skipping fragment: {:?}", fragment);
        return None;
    }

    Some(MatchRecord {
        file_name: chunks[0].to_string(),
        line_number: chunks[1].to_string(),
        path: chunks[2..].join(":"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_match() {
        let records = parse_lines("a.go:12:some code");
        assert_eq!(records, vec![MatchRecord::new("a.go", "12", "some code")]);
    }

    #[test]
    fn test_parse_multiple_lines() {
        let raw = "src/main.rs:3:fn main() {\nsrc/lib.rs:10:pub mod app;\n";
        let records = parse_lines(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], MatchRecord::new("src/main.rs", "3", "fn main() {"));
        assert_eq!(records[1], MatchRecord::new("src/lib.rs", "10", "pub mod app;"));
    }

    #[test]
    fn test_parse_crlf_output() {
        let records = parse_lines("a.txt:1:hello\r\nb.txt:2:world\r\n");
        assert_eq!(records[0].path, "hello");
        assert_eq!(records[1].path, "world");
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let raw = "\
no colons here
only:two
a.rs:1:ok
too:many:colon:chunks
Binary file x.bin matches

";
        let records = parse_lines(raw);
        assert_eq!(records, vec![MatchRecord::new("a.rs", "1", "ok")]);
    }

    #[test]
    fn test_content_with_extra_colon_is_dropped() {
        // The three-chunk rule applies to the whole line, so content
        // containing a colon never reaches the table.
        assert!(parse_lines("main.rs:4:use std::io;").is_empty());
        assert!(parse_fragment("C:\\repo:1:x").is_none());
    }

    #[test]
    fn test_line_number_kept_verbatim() {
        let records = parse_lines("f.txt:007:x\ng.txt:abc:y");
        assert_eq!(records[0].line_number, "007");
        assert_eq!(records[1].line_number, "abc");
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n").is_empty());
        assert!(parse_lines_with("", Delimiter::Space).is_empty());
    }

    #[test]
    fn test_empty_fields_are_allowed() {
        assert_eq!(parse_fragment("::"), Some(MatchRecord::new("", "", "")));
    }

    #[test]
    fn test_space_delimiter_fragments_multi_word_content() {
        // Legacy splitting cuts the match at the first space and the
        // remaining words are discarded as malformed fragments.
        let records = parse_lines_with("a.go:12:some code", Delimiter::Space);
        assert_eq!(records, vec![MatchRecord::new("a.go", "12", "some")]);
    }

    #[test]
    fn test_space_delimiter_merges_adjacent_lines() {
        // Without spaces two newline-separated matches form one fragment
        // with five chunks, which is dropped.
        let raw = "a.go:1:x\nb.go:2:y";
        assert!(parse_lines_with(raw, Delimiter::Space).is_empty());
        assert_eq!(parse_lines(raw).len(), 2);
    }

    #[test]
    fn test_columns_order() {
        let record = MatchRecord::new("x.py", "3", "# TODO fix");
        assert_eq!(record.columns(), ["x.py", "3", "# TODO fix"]);
    }
}
