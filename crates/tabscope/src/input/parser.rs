//! CSV/TSV parser with delimiter detection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::source::{RawTable, SourceMetadata};
use crate::error::{Result, TabscopeError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text into a [`RawTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read and parse a file from disk.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| TabscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.parse_upload(name, &contents)
    }

    /// Parse an in-memory upload.
    pub fn parse_upload(
        &self,
        name: impl Into<String>,
        contents: &[u8],
    ) -> Result<(RawTable, SourceMetadata)> {
        let text = std::str::from_utf8(contents)?;
        if text.trim().is_empty() {
            return Err(TabscopeError::EmptyData(
                "No columns to parse from file".to_string(),
            ));
        }

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(contents)?,
        };

        let table = self.parse_bytes(contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            format = %format,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed delimited input"
        );

        let metadata = SourceMetadata::new(name, contents, format, &table);
        Ok((table, metadata))
    }

    /// Parse bytes with a known delimiter.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let raw_headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if raw_headers.is_empty() {
            return Err(TabscopeError::EmptyData(
                "No columns to parse from file".to_string(),
            ));
        }
        let headers = dedupe_headers(raw_headers);
        let expected_cols = headers.len();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() > expected_cols {
                return Err(TabscopeError::Parse {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    message: format!(
                        "expected {} fields, saw {}",
                        expected_cols,
                        record.len()
                    ),
                });
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            row.resize(expected_cols, String::new());
            rows.push(row);
        }

        Ok(RawTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Give blank headers a positional name and suffix repeated ones.
///
/// `a,a,` becomes `a`, `a.1`, `Unnamed: 2`.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());

    for (idx, header) in headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }

    out
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = std::str::from_utf8(bytes)?;
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return Err(TabscopeError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; comma breaks ties with tab.
        let score = if consistent {
            first_count * 1000 + usize::from(delim == b',') * 100
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_single_column_falls_back_to_comma() {
        let data = b"value\n1\n2";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a,b,c\n1,2\n", b',').unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"a,b\n1,2\n3,4,5\n", b',').unwrap_err();
        match err {
            TabscopeError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 2 fields, saw 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let parser = Parser::new();
        let (table, meta) = parser.parse_upload("h.csv", b"a,b\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(meta.column_count, 2);
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        let parser = Parser::new();
        let err = parser.parse_upload("e.csv", b"  \n").unwrap_err();
        assert!(matches!(err, TabscopeError::EmptyData(_)));
    }

    #[test]
    fn test_non_utf8_is_rejected() {
        let parser = Parser::new();
        let err = parser.parse_upload("b.csv", &[0xff, 0xfe, b',', b'\n']).unwrap_err();
        assert!(matches!(err, TabscopeError::Encoding(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_dedupe_headers() {
        let headers = vec!["a".to_string(), "a".to_string(), " ".to_string()];
        assert_eq!(dedupe_headers(headers), vec!["a", "a.1", "Unnamed: 2"]);
    }

    #[test]
    fn test_metadata_hash_is_stable() {
        let parser = Parser::new();
        let (_, first) = parser.parse_upload("x.csv", b"a\n1\n").unwrap();
        let (_, second) = parser.parse_upload("x.csv", b"a\n1\n").unwrap();
        assert_eq!(first.hash, second.hash);
        assert!(first.hash.starts_with("sha256:"));
        assert_eq!(first.format, "csv");
    }

    #[test]
    fn test_is_null_value() {
        assert!(RawTable::is_null_value(""));
        assert!(RawTable::is_null_value("NA"));
        assert!(RawTable::is_null_value("N/A"));
        assert!(RawTable::is_null_value("NaN"));
        assert!(RawTable::is_null_value("null"));
        assert!(RawTable::is_null_value(" NULL "));
        assert!(!RawTable::is_null_value("value"));
        assert!(!RawTable::is_null_value("0"));
        assert!(!RawTable::is_null_value("."));
        assert!(RawTable::is_null_value("NAN"));
        assert!(RawTable::is_null_value("Nan"));
        assert!(RawTable::is_null_value("+nan"));
        assert!(!RawTable::is_null_value("inf"));
        assert!(!RawTable::is_null_value("nano"));
    }
}
