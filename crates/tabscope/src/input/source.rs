//! Uploaded source metadata and the untyped parse result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Metadata about an uploaded or local data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name as supplied by the client (no path).
    pub file: String,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was received.
    pub received_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a parsed upload.
    pub fn new(file: impl Into<String>, contents: &[u8], format: String, table: &RawTable) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(contents);

        Self {
            file: file.into(),
            hash: format!("sha256:{:x}", hasher.finalize()),
            size_bytes: contents.len() as u64,
            format,
            row_count: table.row_count(),
            column_count: table.column_count(),
            received_at: Utc::now(),
        }
    }
}

/// Delimited text split into cells, before any typing.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column headers, deduplicated.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order), padded to the header width.
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl RawTable {
    /// Create a new raw table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing value.
    ///
    /// Matches the NA spellings spreadsheet and dataframe tools write by
    /// default, plus every spelling of NaN regardless of case or sign. The
    /// comparison is on the trimmed text and is otherwise case-sensitive.
    pub fn is_null_value(value: &str) -> bool {
        let value = value.trim();
        // Anything a float parser would read as NaN, in any case.
        let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
        if unsigned.eq_ignore_ascii_case("nan") {
            return true;
        }

        matches!(
            value,
            "" | "NA"
                | "N/A"
                | "n/a"
                | "NULL"
                | "null"
                | "None"
                | "<NA>"
                | "#N/A"
                | "#N/A N/A"
                | "#NA"
                | "1.#IND"
                | "1.#QNAN"
                | "-1.#IND"
                | "-1.#QNAN"
        )
    }
}
