//! # Benchmark statistics
//!
//! The data model shared by the savina harness: the summary CSV schema
//! `(benchmark, mean, median, err)`, the extended per-run stats schema,
//! the cross-source aggregate that tracks the minimum mean per benchmark,
//! and the fixed benchmark-name mapping tables.
//!
//! Data flows one way: CSV file -> in-memory map -> rendered text. Nothing
//! here spawns processes or writes anything but flat CSV files.

mod display;
mod error;
mod loc;
mod names;
mod num;
mod runs;
mod runtime;
mod summary;

pub use display::round_limited;
pub use error::StatsError;
pub use loc::LocCounts;
pub use names::{benchmark_for_file, display_name, BENCH_FILES};
pub use num::{mean, std_dev};
pub use runs::{TimedRuns, RUN_CAP};
pub use runtime::{RuntimeMap, RuntimeStats, BUCKETS};
pub use summary::{Record, Summary, SummarySet};
