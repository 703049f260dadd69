//! Descriptive statistics.

mod describe;
mod numeric;

pub use describe::{CategoricalSummary, ColumnSummary, Description, Statistic};
pub use numeric::{NumericSummary, StreamingStats, quantile, sample_std};
