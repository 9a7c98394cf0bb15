//! Single-cell markup.

use savbench_stats::{round_limited, Record, SummarySet};

/// Rounding limits for one table's cells.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub mean: f64,
    pub err: f64,
}

/// `mean $\pm$ err` in one cell, highlighted when `record` holds the
/// cross-source minimum. `None` renders the placeholder dash.
pub(crate) fn pm_cell(record: Option<&Record>, set: &SummarySet, limits: Limits) -> String {
    let Some(record) = record else {
        return "-".to_string();
    };

    let body = format!(
        "{} $\\pm$ {}",
        round_limited(record.mean, limits.mean),
        round_limited(record.err, limits.err)
    );

    if set.is_min(record) {
        format!("{{ \\bfseries {body} }}")
    } else {
        body
    }
}

/// `mean & err` as two cells, optionally followed by a
/// `(log10(mean / baseline))` ratio cell. Missing data renders dashes in
/// every cell the column layout expects.
pub(crate) fn split_cell(
    record: Option<&Record>,
    set: &SummarySet,
    limits: Limits,
    baseline: Option<f64>,
    ratio_column: bool,
) -> String {
    let Some(record) = record else {
        return if ratio_column {
            "- & - & -".to_string()
        } else {
            "- & -".to_string()
        };
    };

    let mean = round_limited(record.mean, limits.mean);
    let mut cell = if set.is_min(record) {
        format!("\\underline{{\\bfseries {mean}}}")
    } else {
        mean
    };

    cell.push_str(" & ");
    cell.push_str(&round_limited(record.err, limits.err));

    if ratio_column {
        cell.push_str(" & ");
        match baseline {
            Some(baseline) => {
                let ratio = (record.mean / baseline).log10();
                cell.push_str(&format!("({})", round_limited(ratio, 10.0)));
            }
            None => cell.push('-'),
        }
    }

    cell
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use savbench_stats::Summary;

    use super::*;

    const LIMITS: Limits = Limits {
        mean: 100.0,
        err: 10.0,
    };

    fn source(csv: &str, set: &mut SummarySet) -> Summary {
        Summary::from_reader("test.csv", Cursor::new(csv), set).unwrap()
    }

    #[test]
    fn absent_benchmarks_render_the_dash() {
        let set = SummarySet::new();
        assert_eq!(pm_cell(None, &set, LIMITS), "-");
        assert_eq!(split_cell(None, &set, LIMITS, None, false), "- & -");
        assert_eq!(split_cell(None, &set, LIMITS, None, true), "- & - & -");
    }

    #[test]
    fn minimum_mean_is_bold() {
        let mut set = SummarySet::new();
        let fast = source("Fib,10.0,10.0,0.5\n", &mut set);
        let slow = source("Fib,20.0,20.0,0.5\n", &mut set);

        assert_eq!(
            pm_cell(fast.get("Fib"), &set, LIMITS),
            "{ \\bfseries 10.0 $\\pm$ 0.5 }"
        );
        assert_eq!(pm_cell(slow.get("Fib"), &set, LIMITS), "20.0 $\\pm$ 0.5");
    }

    #[test]
    fn comparison_tables_underline_the_minimum() {
        let mut set = SummarySet::new();
        let fast = source("Fib,10.0,10.0,0.5\n", &mut set);

        assert_eq!(
            split_cell(fast.get("Fib"), &set, LIMITS, None, false),
            "\\underline{\\bfseries 10.0} & 0.5"
        );
    }

    #[test]
    fn ratio_column_is_log10_of_the_speedup() {
        let mut set = SummarySet::new();
        let fast = source("Fib,10.0,10.0,0.5\n", &mut set);
        source("Fib,1.0,1.0,0.5\n", &mut set);

        // 10x slower than the baseline: log10(10/100) = -1.
        assert_eq!(
            split_cell(fast.get("Fib"), &set, LIMITS, Some(100.0), true),
            "10.0 & 0.5 & (-1.0)"
        );
    }

    #[test]
    fn large_values_lose_the_decimal_point() {
        let mut set = SummarySet::new();
        let slow = source("Fib,2481.7,2400.0,12.3\n", &mut set);
        source("Fib,1.0,1.0,0.5\n", &mut set);

        assert_eq!(pm_cell(slow.get("Fib"), &set, LIMITS), "2482 $\\pm$ 12");
    }
}
