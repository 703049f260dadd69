//! Row key resolution: date column, then `ID`, then ordinals.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, warn};

use crate::table::{Column, Table};

/// Column name promoted when no date-like column exists.
pub const ID_COLUMN: &str = "ID";

/// Datetime layouts tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts tried in order. Slashed dates are read month first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// What index resolution did to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexResolution {
    /// Rows sorted by the named date column, which became the row key.
    Date { column: String, unparsed: usize },
    /// The `ID` column became the row key.
    Id,
    /// Rows keep their ordinal positions.
    Ordinal,
}

/// Parse one cell as a timestamp.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    parse_compact_date(text)
}

/// `YYYYMMDD` with no separators.
fn parse_compact_date(text: &str) -> Option<NaiveDateTime> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = text[0..4].parse().ok()?;
    let month = text[4..6].parse().ok()?;
    let day = text[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

/// First column whose name contains "date", ignoring case.
pub fn find_date_column(table: &Table) -> Option<String> {
    table
        .column_names()
        .find(|name| name.to_lowercase().contains("date"))
        .map(str::to_string)
}

/// Order two optional timestamps with missing values last.
fn nulls_last(a: &Option<NaiveDateTime>, b: &Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Pick and install the table's row key.
pub fn resolve_index(table: &mut Table) -> IndexResolution {
    if let Some(name) = find_date_column(table) {
        return promote_date_column(table, &name);
    }

    if table.promote(ID_COLUMN) {
        debug!("using ID column as row key");
        return IndexResolution::Id;
    }

    IndexResolution::Ordinal
}

fn promote_date_column(table: &mut Table, name: &str) -> IndexResolution {
    let Some(column) = table.column(name) else {
        return IndexResolution::Ordinal;
    };

    let present = column.present_count();
    let stamps: Vec<Option<NaiveDateTime>> = (0..column.len())
        .map(|row| column.raw_text(row).and_then(|text| parse_timestamp(&text)))
        .collect();
    let parsed = stamps.iter().filter(|s| s.is_some()).count();

    if present > 0 && parsed == 0 {
        warn!(column = name, present, "no date-column value could be read as a timestamp");
    }

    let mut order: Vec<usize> = (0..stamps.len()).collect();
    order.sort_by(|&a, &b| nulls_last(&stamps[a], &stamps[b]));

    table.replace_column(name, Column::Temporal(stamps));
    table.promote(name);
    table.reorder(&order);

    debug!(column = name, parsed, present, "sorted rows by date column");

    IndexResolution::Date {
        column: name.to_string(),
        unparsed: present - parsed,
    }
}
