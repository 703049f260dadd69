//! Table of typed columns with a row key.

use indexmap::IndexMap;

use super::column::Column;
use crate::input::RawTable;

/// How rows are addressed.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKey {
    /// Row position, starting at zero.
    Ordinal,
    /// A column moved out of the body to label the rows.
    Promoted { name: String, keys: Column },
}

impl RowKey {
    /// Header text for the key column.
    pub fn name(&self) -> &str {
        match self {
            RowKey::Ordinal => "",
            RowKey::Promoted { name, .. } => name,
        }
    }

    /// Label of a row.
    pub fn label(&self, row: usize) -> String {
        match self {
            RowKey::Ordinal => row.to_string(),
            RowKey::Promoted { keys, .. } => keys.display(row),
        }
    }
}

/// A table of named, typed columns aligned by row position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Column>,
    key: RowKey,
    rows: usize,
}

impl Table {
    /// Build a table with ordinal row keys.
    ///
    /// All columns must have `rows` cells.
    pub fn new(columns: IndexMap<String, Column>, rows: usize) -> Self {
        debug_assert!(columns.values().all(|c| c.len() == rows));
        Self {
            columns,
            key: RowKey::Ordinal,
            rows,
        }
    }

    /// Type every column of a parsed file.
    pub fn from_raw(raw: &RawTable) -> Self {
        let columns = raw
            .headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), Column::infer(raw.column_values(idx))))
            .collect();
        Self::new(columns, raw.row_count())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    /// Columns in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub(crate) fn columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns.values_mut()
    }

    pub(crate) fn replace_column(&mut self, name: &str, column: Column) {
        if let Some(slot) = self.columns.get_mut(name) {
            *slot = column;
        }
    }

    /// Reorder every column and the row key by `order`.
    pub fn reorder(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows);
        for column in self.columns.values_mut() {
            column.reorder(order);
        }
        if let RowKey::Promoted { keys, .. } = &mut self.key {
            keys.reorder(order);
        }
    }

    /// Move a column out of the body and use it as the row key.
    ///
    /// Returns false if no such column exists.
    pub fn promote(&mut self, name: &str) -> bool {
        match self.columns.shift_remove(name) {
            Some(keys) => {
                self.key = RowKey::Promoted {
                    name: name.to_string(),
                    keys,
                };
                true
            }
            None => false,
        }
    }
}
