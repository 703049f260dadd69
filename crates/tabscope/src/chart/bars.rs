//! Min-max color-graded bar chart.

use plotters::prelude::*;
use plotters::style::FontTransform;

use super::ChartConfig;
use super::encode::{ChartImage, chart_error, padded_range, render_png};
use super::palette::plasma;
use crate::error::Result;

/// Scale position used for every bar when all values are equal.
pub const DEGENERATE_POSITION: f64 = 0.5;

/// One bar, by row position.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    /// Source value; `None` leaves the slot empty.
    pub value: Option<f64>,
    /// Position on the color scale in [0, 1].
    pub normalized: Option<f64>,
    pub color: RGBColor,
}

/// Min-max normalize present values to [0, 1].
///
/// When every present value is equal the range is empty and each value maps
/// to [`DEGENERATE_POSITION`].
pub fn normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present = values.iter().flatten().copied().filter(|v| v.is_finite());
    let (min, max) = present.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;

    values
        .iter()
        .map(|v| {
            v.map(|v| {
                if span > 0.0 && span.is_finite() {
                    ((v - min) / span).clamp(0.0, 1.0)
                } else {
                    DEGENERATE_POSITION
                }
            })
        })
        .collect()
}

/// One bar per row, in row order, colored by normalized value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn from_values(values: &[Option<f64>]) -> Self {
        let bars = values
            .iter()
            .zip(normalize(values))
            .enumerate()
            .map(|(index, (&value, normalized))| Bar {
                index,
                value,
                normalized,
                color: plasma(normalized.unwrap_or(DEGENERATE_POSITION)),
            })
            .collect();

        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Draw the bars with rotated x tick labels.
    pub fn draw(&self, label: &str, config: &ChartConfig) -> Result<ChartImage> {
        let slots = self.bars.len().max(1) as i32;
        let y_range = padded_range(self.bars.iter().filter_map(|b| b.value));

        render_png(config, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(
                    format!("Creative Dynamic Bar Chart of {} Data", label),
                    ("sans-serif", 28),
                )
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(80)
                .build_cartesian_2d((0..slots).into_segmented(), y_range)
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(self.bars.len().clamp(1, 40))
                .x_label_formatter(&|v| match v {
                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => i.to_string(),
                    SegmentValue::Last => String::new(),
                })
                .x_label_style(
                    ("sans-serif", 12)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .x_desc("Record Index")
                .y_desc(label)
                .axis_desc_style(("sans-serif", 18))
                .draw()
                .map_err(chart_error)?;

            chart
                .draw_series(self.bars.iter().filter_map(|bar| {
                    let value = bar.value?;
                    let x = bar.index as i32;
                    let mut rect = Rectangle::new(
                        [
                            (SegmentValue::Exact(x), 0.0),
                            (SegmentValue::Exact(x + 1), value),
                        ],
                        bar.color.filled(),
                    );
                    rect.set_margin(0, 0, 2, 2);
                    Some(rect)
                }))
                .map_err(chart_error)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let normalized = normalize(&[Some(2.0), Some(4.0), None, Some(3.0)]);
        assert_eq!(normalized, vec![Some(0.0), Some(1.0), None, Some(0.5)]);
    }

    #[test]
    fn test_normalize_constant_column() {
        let normalized = normalize(&[Some(7.0), Some(7.0)]);
        assert_eq!(normalized, vec![Some(DEGENERATE_POSITION); 2]);
    }

    #[test]
    fn test_one_bar_per_row_in_order() {
        let values = [Some(5.0), None, Some(1.0), Some(3.0)];
        let series = BarSeries::from_values(&values);
        assert_eq!(series.len(), 4);
        for (i, bar) in series.bars.iter().enumerate() {
            assert_eq!(bar.index, i);
            assert_eq!(bar.value, values[i]);
        }
        assert_eq!(series.bars[0].color, plasma(1.0));
        assert_eq!(series.bars[2].color, plasma(0.0));
    }

    #[test]
    fn test_constant_column_single_color() {
        let series = BarSeries::from_values(&[Some(7.0); 3]);
        assert!(series.bars.iter().all(|b| b.color == plasma(DEGENERATE_POSITION)));
    }

    #[test]
    fn test_draw_produces_png() {
        let series = BarSeries::from_values(&[Some(1.0), Some(-2.0), Some(4.0)]);
        let config = ChartConfig {
            width: 320,
            height: 200,
        };
        let image = series.draw("Temperature", &config).unwrap();
        assert_eq!(&image.png[..4], b"\x89PNG");
    }
}
