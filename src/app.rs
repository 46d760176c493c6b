//! Application context and the submission pipeline
//!
//! normalize → invoke → parse → present. The context is built once in `main`
//! and handed to the event loop; nothing here is global.

use crate::error::Result;
use crate::parser::{parse_lines_with, Delimiter, MatchRecord};
use crate::path::BaseDirectory;
use crate::presenter::{present, DisplaySurface};
use crate::query::{normalize, SearchQuery};
use crate::search::{GitGrep, SearchInvoker};
use crate::tool::ToolPath;
use std::sync::Arc;
use std::time::Duration;

/// Read-only state shared by every search
#[derive(Clone)]
pub struct AppContext {
    pub base_dir: BaseDirectory,
    pub tool: ToolPath,
    pub delimiter: Delimiter,
    invoker: Arc<dyn SearchInvoker>,
}

impl AppContext {
    /// Context backed by `git grep`
    pub fn git(
        base_dir: BaseDirectory,
        tool: ToolPath,
        timeout: Option<Duration>,
        delimiter: Delimiter,
    ) -> Self {
        let invoker = GitGrep::new(tool.clone()).with_timeout(timeout);
        Self::with_invoker(base_dir, tool, Arc::new(invoker), delimiter)
    }

    pub fn with_invoker(
        base_dir: BaseDirectory,
        tool: ToolPath,
        invoker: Arc<dyn SearchInvoker>,
        delimiter: Delimiter,
    ) -> Self {
        Self {
            base_dir,
            tool,
            delimiter,
            invoker,
        }
    }

    /// Invoke the tool and parse its output.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<MatchRecord>> {
        let raw = self.invoker.invoke(query, &self.base_dir).await?;
        Ok(parse_lines_with(&raw, self.delimiter))
    }

    /// Normalize `raw` and search. `None` means the query was empty and no
    /// search ran.
    pub async fn run_search(&self, raw: &str) -> Option<Result<Vec<MatchRecord>>> {
        let query = normalize(raw)?;
        Some(self.search(&query).await)
    }
}

/// Show a finished search: rows and summary on success, the error text on
/// the status line otherwise.
pub fn apply_result<S: DisplaySurface + ?Sized>(
    result: Result<Vec<MatchRecord>>,
    surface: &mut S,
) {
    match result {
        Ok(records) => {
            let (row_count, _) = present(&records, surface);
            log::info!("Displayed {} rows", row_count);
        }
        Err(err) => {
            log::warn!("Search failed: {}", err);
            surface.set_status(&err.to_string());
        }
    }
}

/// Run the whole pipeline to completion and update `surface`.
pub async fn submit<S: DisplaySurface + ?Sized>(ctx: &AppContext, raw: &str, surface: &mut S) {
    if let Some(result) = ctx.run_search(raw).await {
        apply_result(result, surface);
    }
}
