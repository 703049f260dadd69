//! Typed in-memory table built from a parsed upload.

mod column;
mod frame;

pub use column::{Column, ColumnKind, format_float, format_timestamp};
pub use frame::{RowKey, Table};
