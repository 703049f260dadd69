//! Raster setup and PNG/data-URI encoding.

use std::ops::Range;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::ChartConfig;
use crate::error::{Result, TabscopeError};

/// An encoded chart image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    /// PNG bytes.
    pub png: Vec<u8>,
}

impl ChartImage {
    /// `data:image/png;base64,...` URI for inline embedding.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

pub(crate) fn chart_error<E: std::fmt::Display>(err: E) -> TabscopeError {
    TabscopeError::Chart(err.to_string())
}

/// Draw into an RGB buffer of the configured size and encode it as PNG.
pub(crate) fn render_png<F>(config: &ChartConfig, draw: F) -> Result<ChartImage>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let (width, height) = (config.width, config.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        draw(&root)?;
        root.present().map_err(chart_error)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&buffer, width, height, ColorType::Rgb8)
        .map_err(chart_error)?;

    Ok(ChartImage { png })
}

/// Axis range covering the values and zero, padded by 5% on each side.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (mut lo, mut hi) = (0.0f64, 0.0f64);
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == hi {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
