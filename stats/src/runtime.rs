//! The extended per-run stats schema emitted by the runtime's `--stats`
//! binary: 24 fixed columns per row.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::StatsError;

/// Number of scheduler histogram buckets in a stats row.
pub const BUCKETS: usize = 16;

/// One row of the runtime stats schema:
/// `(tag, benchmark, dump, steal, lifo, pause, unpause, cowns, b0..b15)`.
///
/// The counters are opaque to the harness; only `cowns`, `b1` and `b2` are
/// consumed downstream, but every column is parsed so a schema drift in the
/// measured binary is caught here rather than as a silent misalignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub tag: String,
    pub benchmark: String,
    pub dump: u64,
    pub steal: u64,
    pub lifo: u64,
    pub pause: u64,
    pub unpause: u64,
    pub cowns: u64,
    pub buckets: [u64; BUCKETS],
}

impl RuntimeStats {
    /// Parse one stats row.
    ///
    /// Returns `None` for the header row (the benchmark column carries the
    /// literal `"Tag"`).
    pub fn parse(file: &str, lineno: usize, line: &str) -> Result<Option<Self>, StatsError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 8 + BUCKETS {
            return Err(StatsError::parse(
                file,
                lineno,
                format!("expected {} columns, got {}", 8 + BUCKETS, fields.len()),
            ));
        }

        if fields[1] == "Tag" {
            return Ok(None);
        }

        let counter = |name: &str, s: &str| {
            s.parse::<u64>()
                .map_err(|e| StatsError::parse(file, lineno, format!("bad {name} {s:?}: {e}")))
        };

        let mut buckets = [0; BUCKETS];
        for (i, bucket) in buckets.iter_mut().enumerate() {
            *bucket = counter(&format!("b{i}"), fields[8 + i])?;
        }

        Ok(Some(Self {
            tag: fields[0].to_string(),
            benchmark: fields[1].to_string(),
            dump: counter("dump", fields[2])?,
            steal: counter("steal", fields[3])?,
            lifo: counter("lifo", fields[4])?,
            pause: counter("pause", fields[5])?,
            unpause: counter("unpause", fields[6])?,
            cowns: counter("cowns", fields[7])?,
            buckets,
        }))
    }

    /// Behaviour count reported in histogram bucket `b1`.
    pub const fn behaviours(&self) -> u64 {
        self.buckets[1]
    }

    /// Behaviour count reported in histogram bucket `b2`.
    pub const fn behaviours2(&self) -> u64 {
        self.buckets[2]
    }
}

/// Map from benchmark name to its [`RuntimeStats`]; last write wins.
#[derive(Debug, Default)]
pub struct RuntimeMap {
    map: BTreeMap<String, RuntimeStats>,
}

impl RuntimeMap {
    /// Read a stats CSV. A missing file is reported and yields an empty
    /// map, mirroring the summary reader.
    pub fn read(path: &Path) -> Result<Self, StatsError> {
        if !path.is_file() {
            tracing::warn!("file {} does not exist", path.display());
            return Ok(Self::default());
        }
        Self::from_reader(&path.display().to_string(), BufReader::new(File::open(path)?))
    }

    pub fn from_reader(name: &str, reader: impl BufRead) -> Result<Self, StatsError> {
        let mut map = BTreeMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(stats) = RuntimeStats::parse(name, i + 1, &line)? {
                map.insert(stats.benchmark.clone(), stats);
            }
        }

        Ok(Self { map })
    }

    pub fn get(&self, benchmark: &str) -> Option<&RuntimeStats> {
        self.map.get(benchmark)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const HEADER: &str =
        "tag,Tag,dump,steal,lifo,pause,unpause,cowns,b0,b1,b2,b3,b4,b5,b6,b7,b8,b9,b10,b11,b12,b13,b14,b15";
    const ROW: &str = "run0,Fib,0,12,3,1,1,141,0,283,7,0,0,0,0,0,0,0,0,0,0,0,0,0";

    #[test]
    fn header_row_is_skipped() {
        let map =
            RuntimeMap::from_reader("s.csv", Cursor::new(format!("{HEADER}\n{ROW}\n"))).unwrap();
        assert!(map.get("Tag").is_none());

        let stats = map.get("Fib").unwrap();
        assert_eq!(stats.cowns, 141);
        assert_eq!(stats.behaviours(), 283);
        assert_eq!(stats.behaviours2(), 7);
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let err = RuntimeMap::from_reader("s.csv", Cursor::new("run0,Fib,1,2,3\n")).unwrap_err();
        assert!(matches!(err, StatsError::Parse { line: 1, .. }));
    }

    #[test]
    fn all_buckets_parsed() {
        let map = RuntimeMap::from_reader("s.csv", Cursor::new(ROW)).unwrap();
        let stats = map.get("Fib").unwrap();
        assert_eq!(stats.buckets.len(), BUCKETS);
        assert_eq!(stats.buckets[0], 0);
        assert_eq!(stats.buckets[1], 283);
    }
}
