//! HTML table markup for the preview and statistics tables.

use std::fmt::Write;

use crate::stats::Description;
use crate::table::Table;

/// CSS classes on the preview table.
pub const PREVIEW_CLASSES: &str = "table table-striped";

/// CSS classes on the statistics table.
pub const STATS_CLASSES: &str = "table table-bordered";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Builder for a table with one header row and a labelled header column.
struct HtmlTable {
    out: String,
}

impl HtmlTable {
    fn new(classes: &str, corner: &str, headers: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<table border=\"1\" class=\"dataframe {}\">",
            escape_html(classes)
        );
        out.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
        let _ = writeln!(out, "      <th>{}</th>", escape_html(corner));
        for header in headers {
            let _ = writeln!(out, "      <th>{}</th>", escape_html(header.as_ref()));
        }
        out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        Self { out }
    }

    fn row(&mut self, label: &str, cells: impl IntoIterator<Item = String>) {
        self.out.push_str("    <tr>\n");
        let _ = writeln!(self.out, "      <th>{}</th>", escape_html(label));
        for cell in cells {
            let _ = writeln!(self.out, "      <td>{}</td>", escape_html(&cell));
        }
        self.out.push_str("    </tr>\n");
    }

    fn finish(mut self) -> String {
        self.out.push_str("  </tbody>\n</table>");
        self.out
    }
}

/// Render the first `rows` rows of a table.
pub fn render_preview(table: &Table, rows: usize) -> String {
    let key = table.key();
    let mut html = HtmlTable::new(PREVIEW_CLASSES, key.name(), table.column_names());

    for row in 0..rows.min(table.row_count()) {
        html.row(
            &key.label(row),
            table.columns().map(|(_, column)| column.display(row)),
        );
    }

    html.finish()
}

/// Render descriptive statistics, one column per table column. Statistics
/// that do not apply to a column are blank.
pub fn render_description(description: &Description) -> String {
    let mut html = HtmlTable::new(STATS_CLASSES, "", description.columns.keys());

    for stat in description.statistics() {
        html.row(
            stat.label(),
            description
                .columns
                .values()
                .map(|summary| summary.cell(stat).unwrap_or_default()),
        );
    }

    html.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawTable;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_raw(&RawTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            b',',
        ))
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }

    #[test]
    fn test_preview_limits_rows() {
        let rows: Vec<Vec<String>> = (0..8).map(|i| vec![i.to_string()]).collect();
        let t = Table::from_raw(&RawTable::new(vec!["n".into()], rows, b','));
        let html = render_preview(&t, 5);
        assert_eq!(html.matches("<tr>").count(), 5);
        assert!(html.contains("<td>4</td>"));
        assert!(!html.contains("<td>5</td>"));
        assert!(html.starts_with("<table border=\"1\" class=\"dataframe table table-striped\">"));
    }

    #[test]
    fn test_preview_short_table() {
        let t = table(&["a"], &[&["x"]]);
        assert_eq!(render_preview(&t, 5).matches("<tr>").count(), 1);
    }

    #[test]
    fn test_preview_escapes_cells() {
        let t = table(&["<b>"], &[&["<script>"]]);
        let html = render_preview(&t, 5);
        assert!(html.contains("<th>&lt;b&gt;</th>"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_description_blank_cells() {
        let t = table(&["name", "v"], &[&["a", "1"], &["b", "2"]]);
        let html = render_description(&Description::of(&t));
        assert!(html.contains("class=\"dataframe table table-bordered\""));
        assert!(html.contains("<th>unique</th>\n      <td>2</td>\n      <td></td>"));
        assert!(html.contains("<th>mean</th>\n      <td></td>\n      <td>1.5</td>"));
    }
}
