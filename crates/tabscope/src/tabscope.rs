//! Main Tabscope struct and public API.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chart::{ChartConfig, Charts, render_charts, select_column};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::notice::Notice;
use crate::render::{render_description, render_preview};
use crate::stats::Description;
use crate::table::Table;
use crate::transform::{IndexResolution, forward_fill, resolve_index};

/// Rows shown in the preview table.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Configuration for the upload pipeline.
#[derive(Debug, Clone)]
pub struct TabscopeConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Rows shown in the preview table.
    pub preview_rows: usize,
    /// Chart raster size.
    pub chart: ChartConfig,
}

impl Default for TabscopeConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            chart: ChartConfig::default(),
        }
    }
}

/// Everything produced for one uploaded file.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// How rows were keyed.
    pub index: IndexResolution,
    /// Cells filled by forward-fill.
    pub filled_cells: usize,
    /// Per-column statistics.
    pub description: Description,
    /// Preview table markup.
    pub preview_html: String,
    /// Statistics table markup.
    pub stats_html: String,
    /// Rendered charts, absent when visualization was skipped.
    #[serde(skip)]
    pub charts: Option<Charts>,
    /// Non-fatal warnings raised along the way.
    pub notices: Vec<Notice>,
}

impl Report {
    /// Data URIs of the wave and bar charts.
    pub fn chart_uris(&self) -> Option<(String, String)> {
        self.charts
            .as_ref()
            .map(|c| (c.wave.data_uri(), c.bars.data_uri()))
    }
}

/// The upload-and-describe pipeline.
pub struct Tabscope {
    config: TabscopeConfig,
    parser: Parser,
}

impl Tabscope {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(TabscopeConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: TabscopeConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    pub fn config(&self) -> &TabscopeConfig {
        &self.config
    }

    /// Run the pipeline on a file on disk.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Report> {
        let (raw, source) = self.parser.parse_file(path)?;
        Ok(self.run(Table::from_raw(&raw), source))
    }

    /// Run the pipeline on uploaded bytes.
    ///
    /// Only unreadable input is an error; everything after parsing degrades
    /// into notices on the report.
    pub fn analyze_bytes(&self, name: &str, contents: &[u8]) -> Result<Report> {
        let (raw, source) = self.parser.parse_upload(name, contents)?;
        Ok(self.run(Table::from_raw(&raw), source))
    }

    fn run(&self, mut table: Table, source: SourceMetadata) -> Report {
        info!(
            file = %source.file,
            hash = %source.hash,
            rows = source.row_count,
            columns = source.column_count,
            format = %source.format,
            "analyzing upload"
        );

        let mut notices = Vec::new();

        let index = resolve_index(&mut table);
        debug!(?index, "resolved row key");

        let filled_cells = forward_fill(&mut table);

        let description = Description::of(&table);
        let preview_html = render_preview(&table, self.config.preview_rows);
        let stats_html = render_description(&description);

        let charts = match select_column(&table) {
            Some(selection) => match render_charts(&selection, &self.config.chart) {
                Ok(charts) => Some(charts),
                Err(e) => {
                    warn!(error = %e, "chart rendering failed");
                    notices.push(Notice::ChartUnavailable {
                        reason: e.to_string(),
                    });
                    None
                }
            },
            None => {
                warn!("no numeric column to chart");
                notices.push(Notice::NoNumericColumn);
                None
            }
        };

        Report {
            source,
            index,
            filled_cells,
            description,
            preview_html,
            stats_html,
            charts,
            notices,
        }
    }
}

impl Default for Tabscope {
    fn default() -> Self {
        Self::new()
    }
}
