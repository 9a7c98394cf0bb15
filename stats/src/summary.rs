//! Summary CSV schema and the cross-source aggregate.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use serde::Serialize;

use crate::error::StatsError;

/// One row of the summary schema: `(benchmark, mean, median, err)`.
///
/// Keyed by benchmark name downstream; within one file, last write wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub benchmark: String,
    pub mean: f64,
    pub median: f64,
    pub err: f64,
}

impl Record {
    /// Parse one CSV row. Quoted benchmark names (commas, embedded
    /// quotes) are handled, matching what [`Summary::write`] emits.
    ///
    /// Returns `None` for the header row (benchmark column is the
    /// literal `"benchmark"`).
    pub fn parse(file: &str, lineno: usize, line: &str) -> Result<Option<Self>, StatsError> {
        let fields = split_fields(line);
        let [benchmark, mean, median, err] = &fields[..] else {
            return Err(StatsError::parse(
                file,
                lineno,
                format!("expected 4 columns, got {}", fields.len()),
            ));
        };

        let benchmark = benchmark.trim();
        if benchmark == "benchmark" {
            return Ok(None);
        }

        let float = |name: &str, s: &str| {
            let s = s.trim();
            s.parse::<f64>()
                .map_err(|e| StatsError::parse(file, lineno, format!("bad {name} {s:?}: {e}")))
        };

        Ok(Some(Self {
            benchmark: benchmark.to_string(),
            mean: float("mean", mean)?,
            median: float("median", median)?,
            err: float("err", err)?,
        }))
    }

    /// Render this record as a CSV row (no trailing newline).
    ///
    /// Reading the row back yields an equal record.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            quote(&self.benchmark),
            self.mean,
            self.median,
            self.err
        )
    }
}

/// Per-source map from benchmark name to its [`Record`].
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Summary {
    map: BTreeMap<String, Record>,
}

impl Summary {
    /// Read a summary CSV, folding every retained row into `set`.
    ///
    /// A missing file is reported and yields an empty summary; downstream
    /// renders the placeholder dash for every benchmark.
    pub fn read(path: &Path, set: &mut SummarySet) -> Result<Self, StatsError> {
        if !path.is_file() {
            tracing::warn!("file {} does not exist", path.display());
            return Ok(Self::default());
        }
        Self::from_reader(&path.display().to_string(), BufReader::new(File::open(path)?), set)
    }

    /// Read summary rows from any buffered source.
    pub fn from_reader(
        name: &str,
        reader: impl BufRead,
        set: &mut SummarySet,
    ) -> Result<Self, StatsError> {
        let mut map = BTreeMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(record) = Record::parse(name, i + 1, &line)? {
                set.observe(&record);
                map.insert(record.benchmark.clone(), record);
            }
        }

        Ok(Self { map })
    }

    /// Write these records as a headered summary CSV.
    pub fn write(path: &Path, records: &[Record]) -> Result<(), StatsError> {
        let mut file = File::create(path)?;
        writeln!(file, "benchmark,mean,median,err")?;
        for record in records {
            writeln!(file, "{}", record.csv_row())?;
        }
        Ok(())
    }

    pub fn get(&self, benchmark: &str) -> Option<&Record> {
        self.map.get(benchmark)
    }

    pub fn contains(&self, benchmark: &str) -> bool {
        self.map.contains_key(benchmark)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The cross-source aggregate: every benchmark name seen, and the minimum
/// mean observed for each name across all processed sources.
///
/// The minimum decides which table cell gets the bold markup.
#[derive(Debug, Default)]
pub struct SummarySet {
    benchmarks: BTreeSet<String>,
    min_mean: HashMap<String, f64>,
}

impl SummarySet {
    pub fn new() -> Self {
        Self::default()
    }

    fn observe(&mut self, record: &Record) {
        self.benchmarks.insert(record.benchmark.clone());
        self.min_mean
            .entry(record.benchmark.clone())
            .and_modify(|min| {
                if record.mean < *min {
                    *min = record.mean;
                }
            })
            .or_insert(record.mean);
    }

    /// Minimum mean seen for `benchmark` across every source so far.
    pub fn min_mean(&self, benchmark: &str) -> Option<f64> {
        self.min_mean.get(benchmark).copied()
    }

    /// Whether this record holds the minimum mean for its benchmark.
    ///
    /// Exact comparison: the record and the tracked minimum come from the
    /// same parses, so equality is well-defined.
    pub fn is_min(&self, record: &Record) -> bool {
        self.min_mean(&record.benchmark) == Some(record.mean)
    }

    /// All benchmark names seen, sorted.
    pub fn benchmarks(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.iter().map(String::as_str)
    }
}

/// Quote a field if it contains CSV metacharacters.
fn quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Split one CSV line into its fields, honoring quoted fields with
/// doubled-quote escapes. The inverse of [`quote`].
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if field.is_empty() => quoted = true,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);

    fields
}
