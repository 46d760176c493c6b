//! Base directory validation and resolution

use crate::error::{GggError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Searched when no base directory argument is given
pub const ROOT_DIR: &str = "/";

/// Returns true if a filesystem status query on `path` succeeds.
///
/// Only existence is checked, not permissions or file type.
pub fn is_valid_path(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Directory the external search tool scans. Set once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory(PathBuf);

impl BaseDirectory {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl Default for BaseDirectory {
    fn default() -> Self {
        Self(PathBuf::from(ROOT_DIR))
    }
}

impl fmt::Display for BaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolve the base directory from positional process arguments
/// (program name excluded).
///
/// # Examples
/// ```
/// use ggg::path::{resolve_base_dir, ROOT_DIR};
///
/// let dir = resolve_base_dir::<&str>(&[]).unwrap();
/// assert_eq!(dir.to_string(), ROOT_DIR);
/// ```
pub fn resolve_base_dir<S: AsRef<str>>(args: &[S]) -> Result<BaseDirectory> {
    match args {
        [] => Ok(BaseDirectory::default()),
        [dir] => {
            let dir: &str = dir.as_ref();
            if !is_valid_path(dir) {
                return Err(GggError::InvalidBaseDirectory(dir.to_string()));
            }
            Ok(BaseDirectory(PathBuf::from(dir)))
        }
        _ => Err(GggError::UsageError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_valid_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        std::fs::write(&file, "hello").unwrap();

        assert!(is_valid_path(temp_dir.path()));
        // Existence only: a regular file passes too
        assert!(is_valid_path(&file));
        assert!(!is_valid_path(temp_dir.path().join("missing")));
        assert!(!is_valid_path(""));
    }

    #[test]
    fn test_resolve_defaults_to_root() {
        let dir = resolve_base_dir::<String>(&[]).unwrap();
        assert_eq!(dir.as_path(), Path::new("/"));
    }

    #[test]
    fn test_resolve_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let arg = temp_dir.path().to_string_lossy().to_string();

        let dir = resolve_base_dir(&[arg.clone()]).unwrap();
        assert_eq!(dir.to_string(), arg);
    }

    #[test]
    fn test_resolve_missing_directory() {
        let result = resolve_base_dir(&["noexist"]);
        assert!(matches!(result, Err(GggError::InvalidBaseDirectory(ref p)) if p == "noexist"));
    }

    #[test]
    fn test_resolve_too_many_arguments() {
        let result = resolve_base_dir(&["a", "b"]);
        assert!(matches!(result, Err(GggError::UsageError)));

        // Checked before existence
        let result = resolve_base_dir(&["/", "/"]);
        assert!(matches!(result, Err(GggError::UsageError)));
    }
}
