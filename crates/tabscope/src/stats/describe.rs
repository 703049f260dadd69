//! Per-column descriptive statistics over a whole table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::numeric::NumericSummary;
use crate::table::{Column, Table, format_float};

/// Frequency summary of a non-numeric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Non-missing cells.
    pub count: usize,
    /// Distinct non-missing values.
    pub unique: usize,
    /// Most frequent value; ties go to the value seen first.
    pub top: Option<String>,
    /// Occurrences of `top`.
    pub freq: Option<usize>,
}

impl CategoricalSummary {
    /// Summarize the present cells of a column given as display text.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
        let mut count = 0;
        for cell in cells.into_iter().flatten() {
            count += 1;
            *value_counts.entry(cell).or_insert(0) += 1;
        }

        let mut top: Option<(&str, usize)> = None;
        for (&value, &n) in &value_counts {
            if top.is_none_or(|(_, best)| n > best) {
                top = Some((value, n));
            }
        }

        Self {
            count,
            unique: value_counts.len(),
            top: top.map(|(v, _)| v.to_string()),
            freq: top.map(|(_, n)| n),
        }
    }
}

/// Summary of one column, by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    /// Summarize a column according to its type.
    pub fn of(column: &Column) -> Self {
        match column {
            Column::Numeric { values, .. } => ColumnSummary::Numeric(NumericSummary::from_values(values)),
            Column::Categorical(values) => {
                ColumnSummary::Categorical(CategoricalSummary::from_cells(values.iter().map(|v| v.as_deref())))
            }
            Column::Temporal(_) => {
                let text: Vec<Option<String>> = (0..column.len()).map(|row| column.raw_text(row)).collect();
                ColumnSummary::Categorical(CategoricalSummary::from_cells(text.iter().map(|v| v.as_deref())))
            }
        }
    }

    /// Cell text for a statistic row, or `None` when the statistic does not
    /// apply to this kind of column.
    pub fn cell(&self, stat: Statistic) -> Option<String> {
        fn num(value: Option<f64>) -> String {
            value.map(format_float).unwrap_or_else(|| "NaN".to_string())
        }

        match (self, stat) {
            (ColumnSummary::Numeric(s), Statistic::Count) => Some(s.count.to_string()),
            (ColumnSummary::Numeric(s), Statistic::Mean) => Some(num(s.mean)),
            (ColumnSummary::Numeric(s), Statistic::Std) => Some(num(s.std)),
            (ColumnSummary::Numeric(s), Statistic::Min) => Some(num(s.min)),
            (ColumnSummary::Numeric(s), Statistic::Q1) => Some(num(s.q1)),
            (ColumnSummary::Numeric(s), Statistic::Median) => Some(num(s.median)),
            (ColumnSummary::Numeric(s), Statistic::Q3) => Some(num(s.q3)),
            (ColumnSummary::Numeric(s), Statistic::Max) => Some(num(s.max)),
            (ColumnSummary::Categorical(s), Statistic::Count) => Some(s.count.to_string()),
            (ColumnSummary::Categorical(s), Statistic::Unique) => Some(s.unique.to_string()),
            (ColumnSummary::Categorical(s), Statistic::Top) => {
                Some(s.top.clone().unwrap_or_else(|| "NaN".to_string()))
            }
            (ColumnSummary::Categorical(s), Statistic::Freq) => {
                Some(s.freq.map(|f| f.to_string()).unwrap_or_else(|| "NaN".to_string()))
            }
            _ => None,
        }
    }
}

/// A row of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Count,
    Unique,
    Top,
    Freq,
    Mean,
    Std,
    Min,
    Q1,
    Median,
    Q3,
    Max,
}

impl Statistic {
    const CATEGORICAL: [Statistic; 3] = [Statistic::Unique, Statistic::Top, Statistic::Freq];
    const NUMERIC: [Statistic; 7] = [
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q1,
        Statistic::Median,
        Statistic::Q3,
        Statistic::Max,
    ];

    /// Row label.
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Unique => "unique",
            Statistic::Top => "top",
            Statistic::Freq => "freq",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q1 => "25%",
            Statistic::Median => "50%",
            Statistic::Q3 => "75%",
            Statistic::Max => "max",
        }
    }
}

/// Descriptive statistics for every column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub columns: IndexMap<String, ColumnSummary>,
}

impl Description {
    /// Describe every column of a table.
    pub fn of(table: &Table) -> Self {
        Self {
            columns: table
                .columns()
                .map(|(name, column)| (name.to_string(), ColumnSummary::of(column)))
                .collect(),
        }
    }

    /// Statistic rows present for this mix of column kinds.
    ///
    /// `count` always comes first, then the frequency rows if any column is
    /// categorical, then the moment and quantile rows if any is numeric.
    pub fn statistics(&self) -> Vec<Statistic> {
        let any_numeric = self
            .columns
            .values()
            .any(|s| matches!(s, ColumnSummary::Numeric(_)));
        let any_categorical = self
            .columns
            .values()
            .any(|s| matches!(s, ColumnSummary::Categorical(_)));

        let mut rows = vec![Statistic::Count];
        if any_categorical {
            rows.extend(Statistic::CATEGORICAL);
        }
        if any_numeric {
            rows.extend(Statistic::NUMERIC);
        }
        rows
    }
}
