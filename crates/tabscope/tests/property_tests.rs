//! Property-based tests for the tabscope pipeline.
//!
//! These tests use proptest to generate random tables and verify that the
//! pipeline keeps its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tabscope --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p tabscope --test property_tests
//! ```

use chrono::NaiveDate;
use proptest::prelude::*;

use tabscope::chart::{BarSeries, WaveSeries};
use tabscope::transform::{forward_fill, parse_timestamp, resolve_index};
use tabscope::{Column, RawTable, RowKey, Table, Tabscope};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell that is either a number, a word, or missing.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i32..1000).prop_map(|n| n.to_string()),
        (-1000.0f64..1000.0).prop_map(|f| format!("{:.3}", f)),
        "[a-z]{1,6}",
        Just(String::new()),
        Just("NA".to_string()),
    ]
}

/// A date cell in one of the accepted layouts, or junk.
fn date_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (2000i32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        (2000i32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{:02}/{:02}/{:04}", m, d, y)),
        Just("unknown".to_string()),
        Just(String::new()),
    ]
}

fn raw_table(headers: Vec<String>, rows: Vec<Vec<String>>) -> RawTable {
    RawTable::new(headers, rows, b',')
}

/// Rows of `width` random cells.
fn rows(width: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell(), width), 0..30)
}

fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = headers.join(",");
    out.push('\n');
    for row in rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

// =============================================================================
// Index Resolution Properties
// =============================================================================

proptest! {
    /// Rows end up non-decreasing by parsed timestamp, missing last.
    #[test]
    fn date_rows_are_sorted(
        dates in prop::collection::vec(date_cell(), 1..40),
        header in prop_oneof![Just("Date"), Just("report_date"), Just("DATE")],
    ) {
        // Guarantee at least one parseable date so the column is promoted.
        let mut dates = dates;
        dates.push("2015-06-01".to_string());

        let rows: Vec<Vec<String>> = dates.iter().enumerate().map(|(i, d)| vec![d.clone(), i.to_string()]).collect();
        let mut table = Table::from_raw(&raw_table(vec![header.to_string(), "n".into()], rows));
        resolve_index(&mut table);

        let RowKey::Promoted { keys: Column::Temporal(stamps), .. } = table.key() else {
            panic!("date column was not promoted");
        };
        for pair in stamps.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a <= b),
                (None, Some(_)) => prop_assert!(false, "missing date sorted before a present one"),
                _ => {}
            }
        }
    }

    /// With an `ID` column and no date-like column, IDs become row keys as-is.
    #[test]
    fn id_values_become_keys(ids in prop::collection::vec("[p-z][a-z0-9]{0,7}", 1..30)) {
        let rows: Vec<Vec<String>> = ids.iter().map(|id| vec![id.clone(), "1".into()]).collect();
        let mut table = Table::from_raw(&raw_table(vec!["ID".into(), "v".into()], rows));
        resolve_index(&mut table);

        prop_assert_eq!(table.key().name(), "ID");
        for (row, id) in ids.iter().enumerate() {
            prop_assert_eq!(&table.key().label(row), id);
        }
    }

    /// Parsing an ISO date always round-trips to the same calendar day.
    #[test]
    fn iso_dates_parse(y in 1900i32..2100, m in 1u32..13, d in 1u32..29) {
        let text = format!("{:04}-{:02}-{:02}", y, m, d);
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0);
        prop_assert_eq!(parse_timestamp(&text), expected);
    }
}

// =============================================================================
// Imputation Properties
// =============================================================================

proptest! {
    /// After forward-fill, a missing cell never follows a present one.
    #[test]
    fn forward_fill_leaves_only_leading_gaps(rows in rows(3)) {
        let mut table = Table::from_raw(&raw_table(vec!["a".into(), "b".into(), "c".into()], rows));
        forward_fill(&mut table);

        for (_, column) in table.columns() {
            let mut seen_present = false;
            for row in 0..column.len() {
                if column.is_missing(row) {
                    prop_assert!(!seen_present);
                } else {
                    seen_present = true;
                }
            }
        }
    }

    /// Forward-fill never changes a present cell.
    #[test]
    fn forward_fill_keeps_present_cells(rows in rows(2)) {
        let before = Table::from_raw(&raw_table(vec!["a".into(), "b".into()], rows));
        let mut after = before.clone();
        forward_fill(&mut after);

        for ((_, old), (_, new)) in before.columns().zip(after.columns()) {
            for row in 0..old.len() {
                if !old.is_missing(row) {
                    prop_assert_eq!(old.display(row), new.display(row));
                }
            }
        }
    }
}

// =============================================================================
// Chart Properties
// =============================================================================

proptest! {
    /// One bar per value, in row order, each colored from [0, 1].
    #[test]
    fn bars_match_rows(values in prop::collection::vec(prop::option::of(-1e6f64..1e6), 1..200)) {
        let series = BarSeries::from_values(&values);
        prop_assert_eq!(series.len(), values.len());
        for (i, bar) in series.bars.iter().enumerate() {
            prop_assert_eq!(bar.index, i);
            prop_assert_eq!(bar.value, values[i]);
            if let Some(t) = bar.normalized {
                prop_assert!((0.0..=1.0).contains(&t));
            }
        }
    }

    /// The wave keeps one point per value and a positive amplitude.
    #[test]
    fn wave_keeps_length(values in prop::collection::vec(prop::option::of(-1e6f64..1e6), 0..200)) {
        let series = WaveSeries::from_values(&values);
        prop_assert_eq!(series.points.len(), values.len());
        prop_assert!(series.amplitude > 0.0);
        for ((_, y), v) in series.points.iter().zip(&values) {
            prop_assert_eq!(y.is_some(), v.is_some());
        }
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Markup is a pure function of the input bytes.
    #[test]
    fn markup_is_deterministic(rows in rows(2)) {
        let csv = to_csv(&["label", "value"], &rows);
        let tabscope = Tabscope::new();

        let first = tabscope.analyze_bytes("p.csv", csv.as_bytes());
        let second = tabscope.analyze_bytes("p.csv", csv.as_bytes());

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.preview_html, b.preview_html);
                prop_assert_eq!(a.stats_html, b.stats_html);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "runs disagreed on success"),
        }
    }
}
