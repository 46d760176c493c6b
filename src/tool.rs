//! External tool detection

use crate::error::{GggError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use which::which;

/// Executable providing the `grep` subcommand
pub const GIT: &str = "git";

/// Resolved location of the external search executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPath(PathBuf);

impl ToolPath {
    /// Use an explicit executable, skipping the `PATH` lookup
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ToolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Search the process's `PATH` for `name`.
pub fn locate(name: &str) -> Result<ToolPath> {
    match which(name) {
        Ok(path) => {
            log::debug!("{} resolved to {}", name, path.display());
            Ok(ToolPath(path))
        }
        Err(source) => {
            log::debug!("{} not found on PATH: {}", name, source);
            Err(GggError::ToolNotFound {
                name: name.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_existing_tool() {
        let tool = locate("sh").unwrap();
        assert!(tool.as_path().is_absolute());
        assert!(tool.as_path().exists());
    }

    #[test]
    fn test_locate_missing_tool() {
        let result = locate("ggg-no-such-tool-on-path");
        match result {
            Err(GggError::ToolNotFound { name, .. }) => {
                assert_eq!(name, "ggg-no-such-tool-on-path");
            }
            other => panic!("expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_tool_path() {
        let tool = ToolPath::new("/opt/git/bin/git");
        assert_eq!(tool.to_string(), "/opt/git/bin/git");
    }
}
