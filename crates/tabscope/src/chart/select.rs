//! Choosing the column to chart.

use crate::table::Table;

/// Column preferred for charts when present.
pub const PREFERRED_COLUMN: &str = "Temperature";

/// The column picked for visualization.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Pick `Temperature` if it is numeric, else the first numeric column.
pub fn select_column(table: &Table) -> Option<Selection> {
    let preferred = table
        .column(PREFERRED_COLUMN)
        .and_then(|c| c.as_numeric())
        .map(|values| (PREFERRED_COLUMN, values));

    let (name, values) = preferred.or_else(|| {
        table
            .columns()
            .find_map(|(name, column)| column.as_numeric().map(|values| (name, values)))
    })?;

    Some(Selection {
        name: name.to_string(),
        values: values.to_vec(),
    })
}
