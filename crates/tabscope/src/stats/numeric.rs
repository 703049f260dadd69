//! Numeric summaries.

use serde::{Deserialize, Serialize};

// =============================================================================
// STREAMING MOMENTS
// =============================================================================
// Welford's online algorithm: mean and variance in one pass without the
// cancellation error of the naive sum-of-squares formula.

/// Streaming mean/variance/min/max accumulator.
#[derive(Debug, Clone)]
pub struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl StreamingStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's update.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance (n - 1 denominator). Undefined below two values.
    pub fn variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Sample standard deviation.
    pub fn std(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

impl Default for StreamingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<f64> for StreamingStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        for value in iter {
            stats.add(value);
        }
        stats
    }
}

/// Quantile of sorted data by linear interpolation between closest ranks.
///
/// `q` is in [0, 1]. Returns `None` for empty input.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Sample standard deviation of the present values, if defined.
pub fn sample_std(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().collect::<StreamingStats>().std()
}

/// Summary of a numeric column. `None` fields print as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// First quartile (25th percentile).
    pub q1: Option<f64>,
    pub median: Option<f64>,
    /// Third quartile (75th percentile).
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    /// Summarize the present values of a column.
    pub fn from_values(values: &[Option<f64>]) -> Self {
        let mut present: Vec<f64> = values.iter().flatten().copied().collect();
        let moments: StreamingStats = present.iter().copied().collect();
        present.sort_by(f64::total_cmp);

        Self {
            count: moments.count(),
            mean: moments.mean(),
            std: moments.std(),
            min: moments.min(),
            q1: quantile(&present, 0.25),
            median: quantile(&present, 0.5),
            q3: quantile(&present, 0.75),
            max: moments.max(),
        }
    }
}
