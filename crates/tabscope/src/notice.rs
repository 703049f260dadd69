//! Non-fatal conditions reported alongside a result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-visible warning that did not stop the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// No numeric column to chart.
    NoNumericColumn,
    /// A chart could not be drawn.
    ChartUnavailable { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoNumericColumn => write!(f, "No numeric column available for visualization."),
            Notice::ChartUnavailable { reason } => write!(f, "Charts could not be drawn: {}", reason),
        }
    }
}
