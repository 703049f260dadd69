//! Forward-fill imputation.

use tracing::debug;

use crate::table::Table;

/// Forward-fill every column of the table in row order.
///
/// Row keys are not touched. Returns the total number of cells filled.
pub fn forward_fill(table: &mut Table) -> usize {
    let filled: usize = table.columns_mut().map(|column| column.forward_fill()).sum();
    debug!(filled, "forward-filled missing cells");
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawTable;

    #[test]
    fn test_forward_fill_all_columns() {
        let raw = RawTable::new(
            vec!["n".into(), "s".into(), "empty".into()],
            vec![
                vec!["".into(), "x".into(), "".into()],
                vec!["1.5".into(), "".into(), "".into()],
                vec!["".into(), "".into(), "".into()],
            ],
            b',',
        );
        let mut table = Table::from_raw(&raw);
        assert_eq!(forward_fill(&mut table), 3);

        let n = table.column("n").unwrap();
        assert!(n.is_missing(0));
        assert_eq!(n.display(2), "1.5");

        let s = table.column("s").unwrap();
        assert_eq!(s.display(2), "x");

        assert_eq!(table.column("empty").unwrap().present_count(), 0);
    }
}
