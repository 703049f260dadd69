//! Tabscope: upload a delimited file, get a preview, descriptive statistics,
//! and two decorative charts.
//!
//! The pipeline is linear: parse, key rows by a date or `ID` column,
//! forward-fill gaps, describe every column, and chart one numeric column.
//! Only unreadable input is an error. Everything else degrades into
//! [`Notice`]s attached to the [`Report`].
//!
//! # Example
//!
//! ```no_run
//! use tabscope::Tabscope;
//!
//! let tabscope = Tabscope::new();
//! let report = tabscope.analyze("weather.csv").unwrap();
//!
//! println!("{}", report.stats_html);
//! for notice in &report.notices {
//!     println!("warning: {}", notice);
//! }
//! ```

pub mod chart;
pub mod error;
pub mod input;
pub mod render;
pub mod stats;
pub mod table;
pub mod transform;

mod notice;
mod tabscope;

pub use crate::tabscope::{DEFAULT_PREVIEW_ROWS, Report, Tabscope, TabscopeConfig};
pub use chart::{ChartConfig, ChartImage, Charts};
pub use error::{Result, TabscopeError};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use notice::Notice;
pub use stats::Description;
pub use table::{Column, ColumnKind, RowKey, Table};
pub use transform::IndexResolution;
