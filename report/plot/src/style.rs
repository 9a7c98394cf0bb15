//! Shared sizing and color constants for both charts.

use plotters::style::RGBColor;

/// Pixel dimensions of every rendered chart.
pub(crate) const DIMENSIONS: (u32, u32) = (1000, 600);

/// Ideal speedup curve.
pub(crate) const GREEN: RGBColor = RGBColor(44, 160, 44);

/// Measured series colors, assigned in input order.
pub(crate) const PALETTE: [RGBColor; 6] = [
    RGBColor(255, 127, 14),  // orange
    RGBColor(148, 103, 189), // purple
    RGBColor(31, 119, 180),  // blue
    RGBColor(214, 39, 40),   // red
    RGBColor(140, 86, 75),   // brown
    RGBColor(227, 119, 194), // pink
];

pub(crate) const LABEL_FONT: (&str, u32) = ("sans-serif", 24);
pub(crate) const LEGEND_FONT: (&str, u32) = ("sans-serif", 20);
