//! Error types for the tabscope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabscope operations.
///
/// Only conditions that stop the pipeline are errors. Recoverable problems,
/// such as having no numeric column to chart, are reported as
/// [`Notice`](crate::Notice) values on the report instead.
#[derive(Debug, Error)]
pub enum TabscopeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structural problem in the delimited text.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Empty file or no header to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Drawing or encoding a chart failed.
    #[error("Chart error: {0}")]
    Chart(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TabscopeError {
    /// Whether the error comes from the uploaded content rather than the host.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TabscopeError::Parse { .. }
                | TabscopeError::Csv(_)
                | TabscopeError::Encoding(_)
                | TabscopeError::EmptyData(_)
        )
    }
}

/// Result type alias for tabscope operations.
pub type Result<T> = std::result::Result<T, TabscopeError>;
