// src/constants.rs

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Chart text.
pub const CHART_TITLE: &str = "Function Plotter";
pub const X_AXIS_LABEL: &str = "x";
pub const Y_AXIS_LABEL: &str = "f(x)";

// Written to the working directory unless a PlotStyle overrides it.
pub const DEFAULT_OUTPUT_FILE: &str = "function_plotter.png";

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Legend sample line length in pixels.
pub const LEGEND_LINE_LENGTH_PX: i32 = 20;

// Tick counts along each axis.
pub const X_AXIS_TICKS: usize = 20;
pub const Y_AXIS_TICKS: usize = 10;
pub const MAX_TICK_DECIMALS: usize = 12;

// Ranges narrower than this are padded so the chart has a usable extent.
pub const MIN_AXIS_SPAN: f64 = 1e-6;
pub const DEGENERATE_AXIS_PADDING: f64 = 0.5;
// Fractional padding added above and below the y data range.
pub const Y_RANGE_PADDING_RATIO: f64 = 0.05;

// src/constants.rs
