//! Sine-modulated line chart.

use std::f64::consts::TAU;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::ChartConfig;
use super::encode::{ChartImage, chart_error, padded_range, render_png};
use crate::error::Result;
use crate::stats::sample_std;

/// Fill color under the curve.
const ORCHID: RGBColor = RGBColor(218, 112, 214);

/// Number of sine periods across the x range.
const FREQUENCY: f64 = 3.0;

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Half the sample standard deviation, or 1 when that is zero or undefined.
pub fn amplitude(values: &[Option<f64>]) -> f64 {
    match sample_std(values) {
        Some(std) if std.is_finite() && std != 0.0 => std / 2.0,
        _ => 1.0,
    }
}

/// Values shifted by `amplitude * sin(3x)` over x positions spanning [0, 2π].
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSeries {
    pub amplitude: f64,
    /// `(x, y)` per row; `y` is `None` where the source value is missing.
    pub points: Vec<(f64, Option<f64>)>,
}

impl WaveSeries {
    pub fn from_values(values: &[Option<f64>]) -> Self {
        let amplitude = amplitude(values);
        let points = linspace(0.0, TAU, values.len())
            .into_iter()
            .zip(values)
            .map(|(x, v)| (x, v.map(|v| v + amplitude * (FREQUENCY * x).sin())))
            .collect();

        Self { amplitude, points }
    }

    /// Runs of consecutive present points. The line breaks at missing values.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            match y {
                Some(y) => current.push((x, y)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Draw the dashed line, markers, and translucent fill.
    pub fn draw(&self, label: &str, config: &ChartConfig) -> Result<ChartImage> {
        let y_range = padded_range(self.points.iter().filter_map(|&(_, y)| y));
        let segments = self.segments();

        render_png(config, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(
                    format!("Abstract Wave-Like Pattern of {} Data", label),
                    ("sans-serif", 28),
                )
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80)
                .build_cartesian_2d(0.0..TAU, y_range)
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .x_desc("Abstract Index")
                .y_desc(format!("{} (Transformed)", label))
                .axis_desc_style(("sans-serif", 18))
                .draw()
                .map_err(chart_error)?;

            for segment in &segments {
                chart
                    .draw_series(AreaSeries::new(
                        segment.iter().copied(),
                        0.0,
                        ORCHID.mix(0.3).filled(),
                    ))
                    .map_err(chart_error)?;
                chart
                    .draw_series(DashedLineSeries::new(
                        segment.iter().copied(),
                        10,
                        6,
                        MAGENTA.stroke_width(2),
                    ))
                    .map_err(chart_error)?;
                chart
                    .draw_series(
                        segment
                            .iter()
                            .map(|&point| Circle::new(point, 4, MAGENTA.filled())),
                    )
                    .map_err(chart_error)?;
            }

            Ok(())
        })
    }
}
