//! Filter for mixed timed-run logs.
//!
//! The timed leader-election examples interleave `boc: <n>` and `act: <n>`
//! lines on one stream; this splits them back apart so each group can be
//! summarized.

use std::io::BufRead;

use crate::error::StatsError;

/// Per-group cap: everything after the first 10000 lines of a group is a
/// warm machine artifact and is dropped.
pub const RUN_CAP: usize = 10_000;

/// The two run groups recovered from a timed log.
#[derive(Debug, Default)]
pub struct TimedRuns {
    pub boc: Vec<f64>,
    pub act: Vec<f64>,
}

impl TimedRuns {
    /// Split a log into its `boc:`/`act:` groups, keeping the first
    /// [`RUN_CAP`] values of each. Lines with neither prefix are ignored.
    pub fn from_reader(name: &str, reader: impl BufRead) -> Result<Self, StatsError> {
        let mut runs = Self::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;

            let (group, value) = if let Some(rest) = line.strip_prefix("boc:") {
                (&mut runs.boc, rest)
            } else if let Some(rest) = line.strip_prefix("act:") {
                (&mut runs.act, rest)
            } else {
                continue;
            };

            if group.len() >= RUN_CAP {
                continue;
            }

            let value = value.trim().parse::<i64>().map_err(|e| {
                StatsError::parse(name, i + 1, format!("bad run value {value:?}: {e}"))
            })?;
            group.push(value as f64);
        }

        Ok(runs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn lines_split_by_prefix() {
        let log = "boc: 10\nact: 20\nnoise\nboc: 30\n";
        let runs = TimedRuns::from_reader("runs.txt", Cursor::new(log)).unwrap();
        assert_eq!(runs.boc, [10.0, 30.0]);
        assert_eq!(runs.act, [20.0]);
    }

    #[test]
    fn groups_are_capped_independently() {
        let mut log = String::new();
        for i in 0..(RUN_CAP + 5) {
            log.push_str(&format!("boc: {i}\nact: {i}\n"));
        }
        let runs = TimedRuns::from_reader("runs.txt", Cursor::new(log)).unwrap();
        assert_eq!(runs.boc.len(), RUN_CAP);
        assert_eq!(runs.act.len(), RUN_CAP);
    }

    #[test]
    fn non_integer_value_is_an_error() {
        let err = TimedRuns::from_reader("runs.txt", Cursor::new("boc: x\n")).unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 1, .. }));
    }
}
