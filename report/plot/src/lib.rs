//! # Chart rendering
//!
//! CSV rows in, SVG/PNG charts out, with fixed visual configuration.
//! Two charts exist: the dining-philosophers scaling scatter (log-time
//! against hardware threads, with an ideal-speedup reference line) and the
//! banking scale box plot.

mod dining;
mod error;
mod scale;
mod series;
mod style;

pub use dining::{dining_chart, ideal_series, DiningSeries, FAST_WORK, FULL_WORK};
pub use error::PlotError;
pub use scale::scale_chart;
pub use series::{quartiles_by_cores, read_core_times, read_scale_rows, ScaleRow};

/// Output format for a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Png,
}
