//! Typed column storage.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::input::RawTable;

/// The type a column was given at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every present cell parsed as a number.
    Numeric,
    /// Free text or mixed values.
    Categorical,
    /// Parsed timestamps.
    Temporal,
}

/// A column of cells, typed once when the table is built.
///
/// `None` marks a missing cell in every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values. `integral` is true when every cell was a whole number
    /// and none were missing, which only affects display.
    Numeric {
        values: Vec<Option<f64>>,
        integral: bool,
    },
    /// Raw cell text.
    Categorical(Vec<Option<String>>),
    /// Timestamps.
    Temporal(Vec<Option<NaiveDateTime>>),
}

impl Column {
    /// Type a column from raw cell text.
    ///
    /// A column is numeric when at least one row exists and every non-missing
    /// cell parses as a float. An all-missing column with rows is numeric.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let cells: Vec<Option<&str>> = cells
            .into_iter()
            .map(|c| (!RawTable::is_null_value(c)).then_some(c))
            .collect();

        let parsed: Option<Vec<Option<f64>>> = cells
            .iter()
            .map(|cell| match cell {
                None => Some(None),
                Some(text) => text.trim().parse::<f64>().ok().map(Some),
            })
            .collect();

        match parsed {
            Some(values) if !values.is_empty() => {
                let integral = cells
                    .iter()
                    .all(|c| matches!(c, Some(text) if text.trim().parse::<i64>().is_ok()));
                Column::Numeric { values, integral }
            }
            _ => Column::Categorical(
                cells
                    .into_iter()
                    .map(|c| c.map(|s| s.to_string()))
                    .collect(),
            ),
        }
    }

    /// The column's kind.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Numeric { .. } => ColumnKind::Numeric,
            Column::Categorical(_) => ColumnKind::Categorical,
            Column::Temporal(_) => ColumnKind::Temporal,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric { values, .. } => values.len(),
            Column::Categorical(values) => values.len(),
            Column::Temporal(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the cell at `row` is missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::Numeric { values, .. } => values.get(row).is_some_and(Option::is_none),
            Column::Categorical(values) => values.get(row).is_some_and(Option::is_none),
            Column::Temporal(values) => values.get(row).is_some_and(Option::is_none),
        }
    }

    /// Number of non-missing cells.
    pub fn present_count(&self) -> usize {
        (0..self.len()).filter(|&row| !self.is_missing(row)).count()
    }

    /// Numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            Column::Numeric { values, .. } => Some(values),
            _ => None,
        }
    }

    /// Display text of a cell. Missing cells print as `NaN` (`NaT` for
    /// timestamps).
    pub fn display(&self, row: usize) -> String {
        match self {
            Column::Numeric { values, integral } => match values.get(row).copied().flatten() {
                Some(v) if *integral => format!("{}", v as i64),
                Some(v) => format_float(v),
                None => "NaN".to_string(),
            },
            Column::Categorical(values) => match values.get(row) {
                Some(Some(text)) => text.clone(),
                _ => "NaN".to_string(),
            },
            Column::Temporal(values) => match values.get(row).copied().flatten() {
                Some(ts) => format_timestamp(ts),
                None => "NaT".to_string(),
            },
        }
    }

    /// Cell text for re-parsing, or `None` if missing.
    ///
    /// Whole numbers print without a fractional part even when the column
    /// displays as float, so `20210103` stays readable as a compact date.
    pub fn raw_text(&self, row: usize) -> Option<String> {
        if self.is_missing(row) || row >= self.len() {
            return None;
        }
        match self {
            Column::Numeric { values, .. } => values[row].map(|v| {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    format!("{}", v as i64)
                } else {
                    format_float(v)
                }
            }),
            _ => Some(self.display(row)),
        }
    }

    /// Rearrange rows so that row `i` of the result is row `order[i]` of self.
    pub fn reorder(&mut self, order: &[usize]) {
        fn pick<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
            order.iter().map(|&i| values[i].clone()).collect()
        }

        match self {
            Column::Numeric { values, .. } => *values = pick(values, order),
            Column::Categorical(values) => *values = pick(values, order),
            Column::Temporal(values) => *values = pick(values, order),
        }
    }

    /// Replace each missing cell with the nearest earlier present cell.
    ///
    /// Returns the number of cells filled. Leading missing cells stay missing.
    pub fn forward_fill(&mut self) -> usize {
        fn fill<T: Clone>(values: &mut [Option<T>]) -> usize {
            let mut last: Option<T> = None;
            let mut filled = 0;
            for cell in values.iter_mut() {
                match cell {
                    Some(v) => last = Some(v.clone()),
                    None => {
                        if let Some(prev) = &last {
                            *cell = Some(prev.clone());
                            filled += 1;
                        }
                    }
                }
            }
            filled
        }

        match self {
            Column::Numeric { values, .. } => fill(values),
            Column::Categorical(values) => fill(values),
            Column::Temporal(values) => fill(values),
        }
    }
}

/// Format a float with up to six decimals, trailing zeros trimmed and at
/// least one decimal kept.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut text = format!("{:.6}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    if text == "-0.0" {
        text = "0.0".to_string();
    }
    text
}

/// Format a timestamp, dropping the time part at midnight.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    if ts.time() == NaiveTime::MIN {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
