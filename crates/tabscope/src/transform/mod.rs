//! Transformations applied to a typed table before it is summarized.

mod impute;
mod index;

pub use impute::forward_fill;
pub use index::{ID_COLUMN, IndexResolution, find_date_column, parse_timestamp, resolve_index};
