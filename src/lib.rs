//! ggg - terminal front-end for `git grep`
//!
//! Type a keyword, and the matches found under the base directory are shown
//! in a scrollable table.

pub mod app;
pub mod error;
pub mod parser;
pub mod path;
pub mod presenter;
pub mod query;
pub mod search;
pub mod tool;
pub mod tui;

pub use app::AppContext;
pub use error::{GggError, Result};
pub use parser::{parse_lines, parse_lines_with, Delimiter, MatchRecord};
pub use path::{is_valid_path, resolve_base_dir, BaseDirectory};
pub use presenter::{present, DisplaySurface};
pub use query::{normalize, SearchQuery};
pub use search::{GitGrep, SearchInvoker};
pub use tool::{locate, ToolPath};
pub use tui::run_tui;
