//! External search execution
//!
//! `SearchInvoker` isolates process spawning from query handling and output
//! parsing. `GitGrep` is the production implementation; tests substitute a
//! fake executable through `ToolPath::new`.

use crate::error::{GggError, Result};
use crate::path::BaseDirectory;
use crate::query::SearchQuery;
use crate::tool::ToolPath;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Limit applied to each search unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `git grep` exits with 1 when nothing matched
const NO_MATCH_EXIT_CODE: i32 = 1;

#[async_trait]
pub trait SearchInvoker: Send + Sync {
    /// Run a search and return the tool's raw standard output.
    async fn invoke(&self, query: &SearchQuery, base_dir: &BaseDirectory) -> Result<String>;
}

/// Runs `git grep -n` as a child process
#[derive(Debug, Clone)]
pub struct GitGrep {
    tool: ToolPath,
    timeout: Option<Duration>,
}

impl GitGrep {
    pub fn new(tool: ToolPath) -> Self {
        Self {
            tool,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// `None` lets a search run until the child exits.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Argument vector passed to the tool. Never goes through a shell, so
    /// spaces and metacharacters in the query or path arrive intact.
    pub fn command_args(query: &SearchQuery, base_dir: &BaseDirectory) -> Vec<OsString> {
        vec![
            "grep".into(),
            "-n".into(),
            "-e".into(),
            query.as_str().into(),
            "--".into(),
            base_dir.as_path().as_os_str().to_owned(),
        ]
    }

    /// Directory the tool runs in. `git grep` only works inside a
    /// repository, so this is the base directory itself, or its parent when
    /// the base is a file.
    pub fn working_dir(base_dir: &BaseDirectory) -> Option<&Path> {
        let path = base_dir.as_path();
        if path.is_dir() {
            Some(path)
        } else {
            path.parent().filter(|p| p.is_dir())
        }
    }

    fn command(&self, query: &SearchQuery, base_dir: &BaseDirectory) -> Command {
        let mut cmd = Command::new(self.tool.as_path());
        if let Some(dir) = Self::working_dir(base_dir) {
            cmd.current_dir(dir);
        }
        cmd.args(Self::command_args(query, base_dir))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl SearchInvoker for GitGrep {
    async fn invoke(&self, query: &SearchQuery, base_dir: &BaseDirectory) -> Result<String> {
        log::info!("Running {} grep for {:?} in {}", self.tool, query.as_str(), base_dir);
        let mut cmd = self.command(query, base_dir);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    log::warn!("Search for {:?} timed out after {:?}", query.as_str(), limit);
                    GggError::SearchExecutionError(format!("search timed out after {:?}", limit))
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| {
            log::warn!("Failed to spawn {}: {}", self.tool, e);
            GggError::SearchExecutionError(e.to_string())
        })?;

        interpret_output(output)
    }
}

/// Turn a finished child process into raw output or an execution error.
fn interpret_output(output: Output) -> Result<String> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if output.status.code() == Some(NO_MATCH_EXIT_CODE) && stderr.is_empty() {
        log::debug!("No matches");
        return Ok(stdout);
    }

    let message = if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_string()
    };
    log::warn!("Search failed: {}", message);
    Err(GggError::SearchExecutionError(message))
}
