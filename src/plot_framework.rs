// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, PathElement};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use log::{debug, info};
use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    DEGENERATE_AXIS_PADDING, LEGEND_LINE_LENGTH_PX, LINE_WIDTH_LEGEND, MAX_TICK_DECIMALS,
    MIN_AXIS_SPAN, X_AXIS_TICKS, Y_AXIS_TICKS, Y_RANGE_PADDING_RATIO,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};

/// Calculate plot range with padding.
/// Adds proportional padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = ordered(min_val, max_val);
    let range = (max - min).abs();
    let padding = if range < MIN_AXIS_SPAN {
        DEGENERATE_AXIS_PADDING
    } else {
        range * Y_RANGE_PADDING_RATIO
    };
    (min - padding, max + padding)
}

/// Like [`calculate_range`] but keeps the bounds tight unless the span is degenerate.
/// Used for the sampled axis, where the data already spans the domain.
pub fn calculate_domain_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = ordered(min_val, max_val);
    if (max - min).abs() < MIN_AXIS_SPAN {
        (min - DEGENERATE_AXIS_PADDING, max + DEGENERATE_AXIS_PADDING)
    } else {
        (min, max)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Smallest and largest finite value, or `None` when nothing finite remains.
pub fn finite_bounds<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let finite: Array1<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    let min = *finite.min().ok()?;
    let max = *finite.max().ok()?;
    Some((min, max))
}

/// Splits a curve wherever a coordinate is not finite, so poles and NaNs
/// leave gaps instead of wild strokes across the chart.
pub fn finite_segments(data: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Number of decimals needed so neighbouring ticks over `span` stay distinct.
/// Keeps one digit below the order of magnitude of the approximate tick step.
pub fn tick_decimals(span: f64, tick_count: usize) -> usize {
    let step = span.abs() / tick_count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 1;
    }
    (1.0 - step.log10().floor()).clamp(0.0, MAX_TICK_DECIMALS as f64) as usize
}

/// Tick label for the value axis with a fixed number of decimals.
/// Values that round to zero are printed without a sign.
pub fn format_tick_label(y: f64, decimals: usize) -> String {
    let label = format!("{:.*}", decimals, y);
    match label.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => label,
    }
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Picks a series color from the categorical palette, cycling past its end.
pub fn series_color(index: usize) -> RGBColor {
    let palette = colorous::CATEGORY10;
    let color = palette[index % palette.len()];
    RGBColor(color.r, color.g, color.b)
}

/// Renders every series of `plot_config` as a line chart on one PNG image.
///
/// Each labeled series gets a legend entry even when it has no points.
pub fn draw_line_chart(
    output_filename: &Path,
    dimensions: (u32, u32),
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_filename, dimensions).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let y_decimals = tick_decimals(
        plot_config.y_range.end - plot_config.y_range.start,
        Y_AXIS_TICKS,
    );

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_AXIS_TICKS)
        .y_labels(Y_AXIS_TICKS)
        .y_label_formatter(&|y| format_tick_label(*y, y_decimals))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if !s.label.is_empty() {
            // Invisible anchor point that carries the legend entry, so curves
            // split into several segments (or with no points) appear once.
            let color = s.color;
            chart
                .draw_series(std::iter::once(Circle::new(
                    (plot_config.x_range.start, plot_config.y_range.start),
                    0,
                    color.filled(),
                )))?
                .label(&s.label)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + LEGEND_LINE_LENGTH_PX, y)],
                        color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
            legend_series_count += 1;
        }

        let segments = finite_segments(&s.data);
        debug!(
            "Drawing '{}' as {} segment(s) from {} point(s)",
            s.label,
            segments.len(),
            s.data.len()
        );
        for segment in segments {
            chart.draw_series(LineSeries::new(
                segment,
                s.color.stroke_width(s.stroke_width),
            ))?;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    root_area.present()?;
    info!("Plot saved as '{}'.", output_filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_proportionally() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min + 0.5).abs() < 1e-12);
        assert!((max - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_handles_flat_and_reversed_input() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
        assert_eq!(calculate_range(10.0, 0.0), calculate_range(0.0, 10.0));
    }

    #[test]
    fn test_calculate_domain_range_is_tight() {
        assert_eq!(calculate_domain_range(0.0, 19.9), (0.0, 19.9));
        assert_eq!(calculate_domain_range(5.0, 0.0), (0.0, 5.0));
        assert_eq!(calculate_domain_range(1.0, 1.0), (0.5, 1.5));
    }

    #[test]
    fn test_finite_bounds_skips_nan_and_infinity() {
        let values = vec![f64::NAN, 2.0, f64::INFINITY, -1.0, f64::NEG_INFINITY];
        assert_eq!(finite_bounds(values), Some((-1.0, 2.0)));
        assert_eq!(finite_bounds(vec![f64::NAN]), None);
        assert_eq!(finite_bounds(Vec::new()), None);
    }

    #[test]
    fn test_finite_segments_split_at_gaps() {
        let data = vec![
            (0.0, 1.0),
            (1.0, 2.0),
            (2.0, f64::INFINITY),
            (3.0, f64::NAN),
            (4.0, 5.0),
        ];
        let segments = finite_segments(&data);
        assert_eq!(segments, vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(4.0, 5.0)]]);
        assert!(finite_segments(&[]).is_empty());
    }

    #[test]
    fn test_series_color_cycles_palette() {
        assert_eq!(series_color(0), series_color(10));
        assert_ne!(series_color(0), series_color(1));
    }
}
