//! Banking scale box plot: one box of run times per core count.

use std::path::Path;

use plotters::{coord::Shift, prelude::*};

use crate::{
    error::PlotError,
    series::{quartiles_by_cores, ScaleRow},
    style::{DIMENSIONS, LABEL_FONT, LEGEND_FONT, PALETTE},
    ChartFormat,
};

/// Render the box plot for the banking scale rows to `out`.
pub fn scale_chart(rows: &[ScaleRow], out: &Path, format: ChartFormat) -> Result<(), PlotError> {
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(out, DIMENSIONS).into_drawing_area();
            draw(&root, rows)
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(out, DIMENSIONS).into_drawing_area();
            draw(&root, rows)
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: &[ScaleRow],
) -> Result<(), PlotError> {
    let groups = quartiles_by_cores(rows);
    if groups.is_empty() {
        return Err(PlotError::NoData);
    }

    let cores: Vec<u32> = groups.keys().copied().collect();
    let y_max = groups
        .values()
        .flat_map(|q| q.values())
        .fold(0f32, f32::max);
    // Fences below the minimum (or zero) would break the log axis.
    let y_min = groups
        .values()
        .flat_map(|q| q.values())
        .fold(f32::INFINITY, f32::min)
        .max(y_max / 1000.0);

    root.fill(&WHITE).map_err(PlotError::draw)?;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(cores[..].into_segmented(), (y_min / 2.0..y_max * 2.0).log_scale())
        .map_err(PlotError::draw)?;

    chart
        .configure_mesh()
        .x_desc("Hardware threads")
        .y_desc("Time (ms)")
        .axis_desc_style(LABEL_FONT)
        .label_style(LEGEND_FONT)
        .draw()
        .map_err(PlotError::draw)?;

    chart
        .draw_series(groups.iter().map(|(cores, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(cores), quartiles)
                .width(24)
                .style(PALETTE[0])
        }))
        .map_err(PlotError::draw)?;

    root.present().map_err(PlotError::draw)
}
