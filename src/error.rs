//! Error taxonomy for ggg
//!
//! Everything except `SearchExecutionError` is fatal at startup. A failed
//! search is reported on the status line and the event loop keeps running.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GggError {
    #[error("{name} command not found")]
    ToolNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("base directory not found: {0}")]
    InvalidBaseDirectory(String),

    #[error("usage: ggg [base directory]")]
    UsageError,

    #[error("failed to initialize layout: {0}")]
    LayoutInitError(String),

    /// Displayed verbatim on the status line.
    #[error("{0}")]
    SearchExecutionError(String),

    #[error("application run error: {0}")]
    RunLoopError(String),
}

pub type Result<T> = std::result::Result<T, GggError>;
