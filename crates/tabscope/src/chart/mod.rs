//! Decorative charts of a single numeric column.
//!
//! Both charts are drawn into memory and returned as PNG bytes; nothing is
//! written to disk.

mod bars;
mod encode;
mod palette;
mod select;
mod wave;

pub use bars::{Bar, BarSeries, DEGENERATE_POSITION, normalize};
pub use encode::ChartImage;
pub use palette::plasma;
pub use select::{PREFERRED_COLUMN, Selection, select_column};
pub use wave::{WaveSeries, amplitude, linspace};

use tracing::debug;

use crate::error::Result;

/// Raster size of each chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        // 12x6 inches at 100 dpi.
        Self {
            width: 1200,
            height: 600,
        }
    }
}

/// The two rendered charts for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Charts {
    /// Column the charts were drawn from.
    pub column: String,
    pub wave: ChartImage,
    pub bars: ChartImage,
}

/// Render the wave and bar charts for a selected column.
pub fn render_charts(selection: &Selection, config: &ChartConfig) -> Result<Charts> {
    let wave = WaveSeries::from_values(&selection.values);
    let bars = BarSeries::from_values(&selection.values);
    debug!(
        column = %selection.name,
        amplitude = wave.amplitude,
        bars = bars.len(),
        "rendering charts"
    );

    Ok(Charts {
        column: selection.name.clone(),
        wave: wave.draw(&selection.name, config)?,
        bars: bars.draw(&selection.name, config)?,
    })
}
