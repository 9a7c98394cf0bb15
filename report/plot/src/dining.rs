//! Dining-philosophers scaling chart: per-run times scattered over core
//! counts, with an ideal-speedup line for reference.

use std::path::Path;

use plotters::{coord::Shift, prelude::*};

use crate::{
    error::PlotError,
    style::{DIMENSIONS, GREEN, LABEL_FONT, LEGEND_FONT, PALETTE},
    ChartFormat,
};

/// Total work (in seconds of single-core time) of the full campaign,
/// used to anchor the ideal-speedup line.
pub const FULL_WORK: f64 = 50.0;
/// Work of the `--fast` campaign.
pub const FAST_WORK: f64 = 5.0;

/// One measured series: a legend label and its `(cores, seconds)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct DiningSeries {
    pub label: String,
    pub points: Vec<(u32, f64)>,
}

/// Ideal time curve for `work` seconds of perfectly parallel work. The
/// campaign stops gaining past 50 ways of parallelism (100 philosophers
/// sharing forks), so the curve flattens there.
pub fn ideal_series(work: f64, max_cores: u32) -> Vec<(u32, f64)> {
    (1..=max_cores)
        .map(|cores| (cores, work / f64::from(cores.min(50))))
        .collect()
}

/// Render the scaling chart to `out`.
pub fn dining_chart(
    series: &[DiningSeries],
    out: &Path,
    format: ChartFormat,
    fast: bool,
) -> Result<(), PlotError> {
    let work = if fast { FAST_WORK } else { FULL_WORK };

    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(out, DIMENSIONS).into_drawing_area();
            draw(&root, series, work)
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(out, DIMENSIONS).into_drawing_area();
            draw(&root, series, work)
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[DiningSeries],
    work: f64,
) -> Result<(), PlotError> {
    let max_cores = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(cores, _)| cores))
        .max()
        .ok_or(PlotError::NoData)?;
    let ideal = ideal_series(work, max_cores);

    let times = series
        .iter()
        .flat_map(|s| s.points.iter())
        .chain(ideal.iter())
        .map(|&(_, time)| time);
    let y_min = times.clone().fold(f64::INFINITY, f64::min);
    let y_max = times.fold(0.0, f64::max);
    let x_max = max_cores + 1;

    root.fill(&WHITE).map_err(PlotError::draw)?;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..x_max, (y_min / 2.0..y_max * 2.0).log_scale())
        .map_err(PlotError::draw)?;

    chart
        .configure_mesh()
        .x_desc("Hardware threads")
        .y_desc("Time (s)")
        .axis_desc_style(LABEL_FONT)
        .label_style(LEGEND_FONT)
        .draw()
        .map_err(PlotError::draw)?;

    for (i, measured) in series.iter().enumerate() {
        let style = PALETTE[i % PALETTE.len()].stroke_width(2);
        // Alternating marker shapes keep the series apart in grayscale.
        if i % 2 == 0 {
            chart
                .draw_series(
                    measured
                        .points
                        .iter()
                        .map(|&point| TriangleMarker::new(point, 5, style)),
                )
                .map_err(PlotError::draw)?
                .label(&measured.label)
                .legend(move |(x, y)| TriangleMarker::new((x, y), 5, style));
        } else {
            chart
                .draw_series(
                    measured
                        .points
                        .iter()
                        .map(|&point| Circle::new(point, 4, style)),
                )
                .map_err(PlotError::draw)?
                .label(&measured.label)
                .legend(move |(x, y)| Circle::new((x, y), 4, style));
        }
    }

    chart
        .draw_series(LineSeries::new(ideal, GREEN.stroke_width(2)))
        .map_err(PlotError::draw)?
        .label("Ideal")
        .legend(|(x, y)| PathElement::new([(x - 8, y), (x + 8, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(LEGEND_FONT)
        .draw()
        .map_err(PlotError::draw)?;

    root.present().map_err(PlotError::draw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ideal_curve_flattens_past_fifty_cores() {
        let curve = ideal_series(FULL_WORK, 72);
        assert_eq!(curve.len(), 72);
        assert_eq!(curve[0], (1, 50.0));
        assert_eq!(curve[24], (25, 2.0));
        assert_eq!(curve[49], (50, 1.0));
        // No further speedup beyond the parallelism cap.
        assert_eq!(curve[71], (72, 1.0));
    }

    #[test]
    fn series_markers_alternate_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.svg");
        let series = [
            DiningSeries {
                label: "Threads and Mutex".to_string(),
                points: vec![(1, 50.0), (8, 7.0)],
            },
            DiningSeries {
                label: "Cowns and Behaviours".to_string(),
                points: vec![(1, 52.0), (8, 6.5)],
            },
        ];
        dining_chart(&series, &out, ChartFormat::Svg, false).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<polygon"), "no triangle markers in {out:?}");
        assert!(svg.contains("<circle"), "no circle markers in {out:?}");
    }

    #[test]
    fn empty_input_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.svg");
        assert!(matches!(
            dining_chart(&[], &out, ChartFormat::Svg, false),
            Err(PlotError::NoData)
        ));
    }
}
