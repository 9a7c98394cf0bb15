//! CSV row readers and the grouping transforms behind the charts.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use plotters::data::Quartiles;

use crate::error::PlotError;

/// Read a `cores,time` CSV (the dining campaign's output) into a flat
/// point list. The header row is skipped.
pub fn read_core_times(path: &Path) -> Result<Vec<(u32, f64)>, PlotError> {
    let name = path.display().to_string();
    let mut points = Vec::new();

    for (i, line) in BufReader::new(File::open(path)?).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let (Some(cores), Some(time)) = (fields.next(), fields.next()) else {
            return Err(PlotError::parse(&name, i + 1, "expected 2 columns"));
        };
        if cores == "cores" {
            continue;
        }

        points.push((
            cores.parse::<u32>().map_err(|e| {
                PlotError::parse(&name, i + 1, format!("bad cores {cores:?}: {e}"))
            })?,
            time.parse::<f64>().map_err(|e| {
                PlotError::parse(&name, i + 1, format!("bad time {time:?}: {e}"))
            })?,
        ));
    }

    Ok(points)
}

/// One row of the banking scale CSV: `(paradigm, cores, benchmark, time)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRow {
    pub paradigm: String,
    pub cores: u32,
    pub benchmark: String,
    pub time: f64,
}

/// Read the banking scale CSV. A header row (paradigm column carrying the
/// literal `"paradigm"`) is skipped.
pub fn read_scale_rows(path: &Path) -> Result<Vec<ScaleRow>, PlotError> {
    let name = path.display().to_string();
    let mut rows = Vec::new();

    for (i, line) in BufReader::new(File::open(path)?).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let (Some(paradigm), Some(cores), Some(benchmark), Some(time)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(PlotError::parse(&name, i + 1, "expected 4 columns"));
        };
        if paradigm == "paradigm" {
            continue;
        }

        rows.push(ScaleRow {
            paradigm: paradigm.to_string(),
            cores: cores.parse::<u32>().map_err(|e| {
                PlotError::parse(&name, i + 1, format!("bad cores {cores:?}: {e}"))
            })?,
            benchmark: benchmark.to_string(),
            time: time.parse::<f64>().map_err(|e| {
                PlotError::parse(&name, i + 1, format!("bad time {time:?}: {e}"))
            })?,
        });
    }

    Ok(rows)
}

/// Group scale rows by core count and reduce each group to its quartiles,
/// ready for one box per core count.
pub fn quartiles_by_cores(rows: &[ScaleRow]) -> BTreeMap<u32, Quartiles> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.cores).or_default().push(row.time);
    }

    groups
        .into_iter()
        .map(|(cores, times)| (cores, Quartiles::new(&times)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        (dir, path)
    }

    #[test]
    fn core_times_skip_the_header() {
        let (_dir, path) = write_file("cores,time\n1,10.5\n2,5.25\n");
        assert_eq!(read_core_times(&path).unwrap(), [(1, 10.5), (2, 5.25)]);
    }

    #[test]
    fn scale_rows_parse_all_four_columns() {
        let (_dir, path) = write_file("BoC,8,banking,12.5\nPony,8,banking,14.0\n");
        let rows = read_scale_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].paradigm, "BoC");
        assert_eq!(rows[0].cores, 8);
        assert_eq!(rows[1].time, 14.0);
    }

    #[test]
    fn short_row_is_an_error() {
        let (_dir, path) = write_file("1\n");
        assert!(matches!(
            read_core_times(&path),
            Err(PlotError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn quartiles_group_by_core_count() {
        let rows: Vec<ScaleRow> = [(1, 10.0), (1, 12.0), (1, 14.0), (8, 2.0), (8, 4.0)]
            .into_iter()
            .map(|(cores, time)| ScaleRow {
                paradigm: "BoC".to_string(),
                cores,
                benchmark: "banking".to_string(),
                time,
            })
            .collect();

        let groups = quartiles_by_cores(&rows);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 8]);
        // Median of the single-core group.
        assert_eq!(groups[&1].values()[2], 12.0);
    }
}
