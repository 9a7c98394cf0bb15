//! By-file `cloc` output, attributed to benchmarks.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{error::StatsError, names::benchmark_for_file};

/// Non-blank, non-comment line counts per benchmark, for the actor and
/// full-BoC encodings of each.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LocCounts {
    actor: BTreeMap<String, u64>,
    full: BTreeMap<String, u64>,
}

impl LocCounts {
    /// Parse a `cloc --by-file --csv` output file.
    pub fn read(path: &Path) -> Result<Self, StatsError> {
        Self::from_reader(&path.display().to_string(), BufReader::new(File::open(path)?))
    }

    pub fn from_reader(name: &str, reader: impl BufRead) -> Result<Self, StatsError> {
        let mut counts = Self::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split(',').collect();
            // Rows of interest are exactly (language, filename, blank,
            // comment, code); the header and the SUM footer either differ
            // in shape or fail the prefix match below.
            let [_language, filename, _blank, _comment, code] = fields[..] else {
                continue;
            };
            counts.observe(name, filename.trim(), i + 1, code)?;
        }

        Ok(counts)
    }

    pub fn actor(&self, benchmark: &str) -> Option<u64> {
        self.actor.get(benchmark).copied()
    }

    pub fn full(&self, benchmark: &str) -> Option<u64> {
        self.full.get(benchmark).copied()
    }

    /// Fold one by-file row in. Only files under `./actors/` or `./boc/`
    /// whose suite-relative path appears in the fixed mapping table count;
    /// everything else (helpers, files outside the suites) is ignored.
    fn observe(&mut self, name: &str, file: &str, line: usize, code: &str) -> Result<(), StatsError> {
        let (map, relative) = if let Some(rest) = file.strip_prefix("./actors/") {
            (&mut self.actor, rest)
        } else if let Some(rest) = file.strip_prefix("./boc/") {
            (&mut self.full, rest)
        } else {
            return Ok(());
        };

        let Some(benchmark) = benchmark_for_file(relative) else {
            return Ok(());
        };

        let code = code.trim().parse::<u64>().map_err(|e| {
            StatsError::parse(name, line, format!("bad code count {code:?}: {e}"))
        })?;
        map.insert(benchmark.to_string(), code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    const CLOC_OUT: &str = "\
language,filename,blank,comment,code
C/C++ Header,./actors/micro/fib.h,10,2,57
C/C++ Header,./boc/micro/fib.h,8,1,41
C/C++ Header,./actors/custom/safe_print.h,3,0,20
C/C++ Header,./util/bench.h,5,1,100
SUM,,26,4,218
";

    fn parse(s: &str) -> LocCounts {
        LocCounts::from_reader("cloc_raw.csv", Cursor::new(s)).unwrap()
    }

    #[test]
    fn counts_keyed_by_benchmark_and_suite() {
        let counts = parse(CLOC_OUT);
        assert_eq!(counts.actor("Fib"), Some(57));
        assert_eq!(counts.full("Fib"), Some(41));
    }

    #[test]
    fn unmapped_and_out_of_suite_files_are_ignored() {
        let counts = parse(CLOC_OUT);
        // safe_print.h is under actors/ but is not a benchmark; bench.h
        // is outside both suites.
        assert_eq!(counts.actor("safe_print"), None);
        let mut expected = LocCounts::default();
        expected.actor.insert("Fib".to_string(), 57);
        expected.full.insert("Fib".to_string(), 41);
        assert_eq!(counts, expected);
    }

    #[test]
    fn header_row_never_reaches_the_count_parse() {
        // "code" is not numeric, but the header's filename matches no
        // suite prefix, so the row is skipped first.
        assert!(LocCounts::from_reader("c.csv", Cursor::new("language,filename,blank,comment,code\n")).is_ok());
    }

    #[test]
    fn bad_count_under_a_suite_is_an_error() {
        let err = LocCounts::from_reader(
            "c.csv",
            Cursor::new("C/C++ Header,./actors/micro/fib.h,1,1,many\n"),
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 1, .. }));
    }
}
