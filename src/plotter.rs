// src/plotter.rs

use log::{debug, warn};

use std::error::Error;
use std::path::PathBuf;

use crate::constants::{
    CHART_TITLE, DEFAULT_OUTPUT_FILE, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use crate::domain::Domain;
use crate::function::Function;
use crate::plot_framework::{
    calculate_domain_range, calculate_range, draw_line_chart, finite_bounds, series_color,
    PlotConfig, PlotSeries,
};

/// Chart text, image size and output location used by [`Plotter::plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// Collects labeled functions and draws them together over one sampling domain.
///
/// Functions are drawn, and listed in the legend, in the order they were added.
#[derive(Debug, Clone)]
pub struct Plotter {
    domain: Domain,
    functions: Vec<(String, Function)>,
    style: PlotStyle,
}

impl Plotter {
    pub fn new(domain_start: f64, domain_end: f64, step_size: f64) -> Self {
        Self {
            domain: Domain::new(domain_start, domain_end, step_size),
            functions: Vec::new(),
            style: PlotStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Registers a function under `label`. Labels need not be unique.
    pub fn add_func(&mut self, label: impl Into<String>, function: Function) {
        self.functions.push((label.into(), function));
    }

    pub fn functions(&self) -> &[(String, Function)] {
        &self.functions
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Evaluates every registered function over the domain samples.
    ///
    /// A panic inside any function aborts the whole call.
    pub fn sample(&self) -> Vec<PlotSeries> {
        let x_values = self.domain.samples();
        if x_values.is_empty() {
            warn!(
                "Domain [{}, {}) with step {} has no sample points; curves will be empty",
                self.domain.start, self.domain.end, self.domain.step
            );
        }

        self.functions
            .iter()
            .enumerate()
            .map(|(index, (label, function))| {
                let y_values = function.eval(&x_values);
                debug!("Sampled '{}' at {} point(s)", label, y_values.len());
                PlotSeries {
                    data: x_values.iter().copied().zip(y_values.iter().copied()).collect(),
                    label: label.clone(),
                    color: series_color(index),
                    stroke_width: LINE_WIDTH_PLOT,
                }
            })
            .collect()
    }

    /// Samples all functions and derives the chart ranges from the finite points.
    pub fn plot_config(&self) -> PlotConfig {
        let series = self.sample();

        let (x_min, x_max) = finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| p.0)))
            .or_else(|| finite_bounds([self.domain.start, self.domain.end]))
            .unwrap_or((0.0, 1.0));
        let (x_min, x_max) = calculate_domain_range(x_min, x_max);

        let (y_min, y_max) = finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| p.1)))
            .unwrap_or((0.0, 0.0));
        let (y_min, y_max) = calculate_range(y_min, y_max);

        PlotConfig {
            title: self.style.title.clone(),
            x_range: x_min..x_max,
            y_range: y_min..y_max,
            series,
            x_label: self.style.x_label.clone(),
            y_label: self.style.y_label.clone(),
        }
    }

    /// Samples, renders and writes the chart to the style's output path.
    pub fn plot(&self) -> Result<(), Box<dyn Error>> {
        let plot_config = self.plot_config();
        draw_line_chart(
            &self.style.output_path,
            (self.style.width, self.style.height),
            &plot_config,
        )
    }
}


// src/plotter.rs
