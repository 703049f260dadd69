//! Describe command - run the upload pipeline on a local file.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tabscope::stats::Description;
use tabscope::{Charts, IndexResolution, Tabscope};

pub fn run(
    file: PathBuf,
    json_output: bool,
    charts_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tabscope = Tabscope::new();
    let report = tabscope.analyze(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            "Statistics for".cyan().bold(),
            report.source.file.white()
        );
        println!(
            "  {} rows x {} columns ({})",
            report.source.row_count, report.source.column_count, report.source.format
        );
        if verbose {
            println!("  Hash: {}", report.source.hash);
            println!(
                "  Received: {}",
                report.source.received_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        println!("  Rows keyed by: {}", describe_index(&report.index));
        if report.filled_cells > 0 {
            println!("  Forward-filled cells: {}", report.filled_cells);
        }
        println!();
        print!("{}", format_description(&report.description));
    }

    for notice in &report.notices {
        eprintln!("{} {}", "Warning:".yellow(), notice);
    }

    if let Some(dir) = charts_dir {
        match &report.charts {
            Some(charts) => {
                let written = write_charts(charts, &dir)?;
                for path in written {
                    eprintln!("{} {}", "Wrote".green(), path.display());
                }
            }
            None => eprintln!("{} no charts to write", "Note:".yellow()),
        }
    }

    Ok(())
}

fn describe_index(index: &IndexResolution) -> String {
    match index {
        IndexResolution::Date { column, unparsed: 0 } => format!("date column '{}'", column),
        IndexResolution::Date { column, unparsed } => {
            format!("date column '{}' ({} unparsed, sorted last)", column, unparsed)
        }
        IndexResolution::Id => "ID column".to_string(),
        IndexResolution::Ordinal => "row position".to_string(),
    }
}

/// Plain-text rendition of the statistics table.
fn format_description(description: &Description) -> String {
    let stats = description.statistics();
    let mut header = vec![String::new()];
    header.extend(description.columns.keys().cloned());

    let mut rows = vec![header];
    for stat in &stats {
        let mut row = vec![stat.label().to_string()];
        row.extend(
            description
                .columns
                .values()
                .map(|summary| summary.cell(*stat).unwrap_or_else(|| "NaN".to_string())),
        );
        rows.push(row);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|i| rows.iter().map(|r| r[i].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &w))| {
                if i == 0 {
                    format!("{:<w$}", cell)
                } else {
                    format!("{:>w$}", cell)
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn write_charts(charts: &Charts, dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, image) in [("wave.png", &charts.wave), ("bars.png", &charts.bars)] {
        let path = dir.join(name);
        std::fs::write(&path, &image.png)?;
        written.push(path);
    }
    Ok(written)
}
