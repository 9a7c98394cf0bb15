//! The three table layouts.
//!
//! Each renders one LaTeX row per benchmark, sorted by name, and returns
//! the whole fragment as a `String`; the caller prints it once.

use savbench_stats::{display_name, LocCounts, RuntimeMap, Summary, SummarySet};

use crate::entry::{pm_cell, split_cell, Limits};

/// Compact summary table: values are whole-benchmark times, so the
/// decimal point survives up to a second of a thousand units.
const SUMMARY_LIMITS: Limits = Limits {
    mean: 1000.0,
    err: 100.0,
};

/// Actor comparison table: per-iteration times an order of magnitude
/// smaller, tighter limits.
const ACTOR_LIMITS: Limits = Limits {
    mean: 100.0,
    err: 10.0,
};

/// Full-BoC table.
const FULL_LIMITS: Limits = Limits {
    mean: 1000.0,
    err: 100.0,
};

/// The compact summary table: one `mean $\pm$ err` cell per source, in
/// the caller's column order.
pub fn summary_table(columns: &[&Summary], set: &SummarySet) -> String {
    let mut out = String::new();

    for benchmark in set.benchmarks() {
        out.push_str(display_name(benchmark));
        for column in columns {
            out.push_str(" & ");
            out.push_str(&pm_cell(column.get(benchmark), set, SUMMARY_LIMITS));
        }
        out.push_str(" \\\\\n");
    }

    out
}

/// The Pony-vs-actor comparison: single-core Pony is the speedup
/// baseline, and every other source carries a `(log10)` ratio column.
/// Cown and behaviour counts from the stats pass close the row.
pub fn actor_table(
    pony1: &Summary,
    pony8: &Summary,
    actor1: &Summary,
    actor8: &Summary,
    stats: &RuntimeMap,
    set: &SummarySet,
) -> String {
    let mut out = String::new();

    for benchmark in set.benchmarks() {
        // 2PC is a different protocol, not an encoding of the same
        // benchmark; it gets its own discussion in the text.
        if benchmark == "Banking 2PC" {
            continue;
        }

        let baseline = pony1.get(benchmark).map(|r| r.mean);

        out.push_str(display_name(benchmark));
        out.push_str(" & ");
        out.push_str(&split_cell(pony1.get(benchmark), set, ACTOR_LIMITS, None, false));
        for column in [pony8, actor1, actor8] {
            out.push_str(" & ");
            out.push_str(&split_cell(
                column.get(benchmark),
                set,
                ACTOR_LIMITS,
                baseline,
                true,
            ));
        }

        let (cowns, behaviours) = match stats.get(benchmark) {
            Some(stats) => (stats.cowns.to_string(), stats.behaviours().to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        out.push_str(&format!(" & {cowns} & {behaviours} \\\\\n"));
    }

    out
}

/// The full actor-vs-BoC table: line counts, times and runtime counters
/// for both encodings side by side. Restricted to benchmarks with a
/// full-BoC measurement; the concurrent dictionary has none worth
/// comparing.
pub fn full_table(
    actor1: &Summary,
    actor8: &Summary,
    full1: &Summary,
    full8: &Summary,
    actor_stats: &RuntimeMap,
    full_stats: &RuntimeMap,
    loc: &LocCounts,
    set: &SummarySet,
) -> String {
    let mut out = String::new();

    for benchmark in set.benchmarks() {
        if !full1.contains(benchmark) || benchmark == "Concurrent Dictionary" {
            continue;
        }

        out.push_str(display_name(benchmark));

        out.push_str(&format!(" & {}", count_cell(loc.actor(benchmark))));
        for column in [actor1, actor8] {
            out.push_str(" & ");
            out.push_str(&split_cell(column.get(benchmark), set, FULL_LIMITS, None, false));
        }
        match actor_stats.get(benchmark) {
            Some(stats) => {
                out.push_str(&format!(" & {} & {}", stats.cowns, stats.behaviours()));
            }
            None => out.push_str(" & - & -"),
        }

        out.push_str(&format!(" & {}", count_cell(loc.full(benchmark))));
        for column in [full1, full8] {
            out.push_str(" & ");
            out.push_str(&split_cell(column.get(benchmark), set, FULL_LIMITS, None, false));
        }
        match full_stats.get(benchmark) {
            Some(stats) => out.push_str(&format!(
                " & {} & {} & {}",
                stats.cowns,
                stats.behaviours(),
                stats.behaviours2()
            )),
            None => out.push_str(" & - & - & -"),
        }

        out.push_str(" \\\\\n");
    }

    out
}

fn count_cell(count: Option<u64>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn source(csv: &str, set: &mut SummarySet) -> Summary {
        Summary::from_reader("test.csv", Cursor::new(csv), set).unwrap()
    }

    fn stats(rows: &str) -> RuntimeMap {
        RuntimeMap::from_reader("stats.csv", Cursor::new(rows)).unwrap()
    }

    #[test]
    fn summary_rows_are_sorted_and_dashed() {
        let mut set = SummarySet::new();
        let a = source("Fib,10.0,10.0,0.5\nBanking,3.0,3.0,0.1\n", &mut set);
        let b = source("Fib,20.0,20.0,0.5\n", &mut set);

        let table = summary_table(&[&a, &b], &set);
        assert_eq!(
            table,
            "Banking & { \\bfseries 3.0 $\\pm$ 0.1 } & - \\\\\n\
             Fib & { \\bfseries 10.0 $\\pm$ 0.5 } & 20.0 $\\pm$ 0.5 \\\\\n"
        );
    }

    #[test]
    fn two_absent_benchmarks_both_render_dashes() {
        let mut set = SummarySet::new();
        let a = source("Fib,10.0,10.0,0.5\nCount,1.0,1.0,0.1\n", &mut set);
        let empty = Summary::default();

        let table = summary_table(&[&a, &empty], &set);
        for line in table.lines() {
            assert!(line.ends_with("& - \\\\"), "expected dash in {line:?}");
        }
    }

    #[test]
    fn long_names_are_shortened_in_rows() {
        let mut set = SummarySet::new();
        let a = source("Recursive Matrix Multiplication,10.0,10.0,0.5\n", &mut set);
        let table = summary_table(&[&a], &set);
        assert!(table.starts_with("Matrix Mult & "));
        assert!(!table.contains("Recursive"));
    }

    #[test]
    fn actor_table_skips_banking_2pc_and_carries_counters() {
        let mut set = SummarySet::new();
        let p1 = source("Fib,100.0,100.0,1.0\nBanking 2PC,5.0,5.0,0.1\n", &mut set);
        let p8 = source("Fib,20.0,20.0,1.0\n", &mut set);
        let a1 = source("Fib,50.0,50.0,1.0\n", &mut set);
        let a8 = source("Fib,10.0,10.0,1.0\nBanking 2PC,4.0,4.0,0.1\n", &mut set);
        let counters = stats(
            "run0,Fib,0,0,0,0,0,141,0,283,7,0,0,0,0,0,0,0,0,0,0,0,0,0\n",
        );

        let table = actor_table(&p1, &p8, &a1, &a8, &counters, &set);
        assert!(!table.contains("Banking 2PC"));

        // One row: Fib. Baseline 100 -> actor8 ratio log10(10/100) = -1.
        assert_eq!(
            table,
            "Fib & 100 & 1.0 \
             & 20.0 & 1.0 & (-0.7) \
             & 50.0 & 1.0 & (-0.3) \
             & \\underline{\\bfseries 10.0} & 1.0 & (-1.0) \
             & 141 & 283 \\\\\n"
        );
    }

    #[test]
    fn full_table_requires_a_full_boc_measurement() {
        let mut set = SummarySet::new();
        let a1 = source("Fib,10.0,10.0,0.5\nConcurrent Dictionary,9.0,9.0,0.5\nCount,2.0,2.0,0.1\n", &mut set);
        let a8 = source("Fib,6.0,6.0,0.5\n", &mut set);
        let f1 = source("Fib,8.0,8.0,0.5\nConcurrent Dictionary,7.0,7.0,0.5\n", &mut set);
        let f8 = source("Fib,4.0,4.0,0.5\n", &mut set);

        let table = full_table(
            &a1,
            &a8,
            &f1,
            &f8,
            &RuntimeMap::default(),
            &RuntimeMap::default(),
            &LocCounts::default(),
            &set,
        );

        // Count has no full-BoC source, Concurrent Dictionary is excluded.
        assert!(table.starts_with("Fib & "));
        assert_eq!(table.lines().count(), 1);
        // Missing loc and stats render dashes, not panics.
        assert!(table.contains("& - & - & -"));
    }
}
