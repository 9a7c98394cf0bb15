//! # Subprocess drivers
//!
//! Everything that spawns the measured binaries: the savina campaign, the
//! dining-philosophers scaling campaign, and the `cloc` line counter.
//!
//! Execution is strictly sequential; each child blocks the harness until it
//! exits, and a non-zero exit aborts the whole campaign. The only outputs
//! are the CSV files the campaigns leave behind.
//!
//! Command lines are built by pure functions on the campaign types so tests
//! can assert the exact argv without spawning anything.

mod cloc;
mod cores;
mod dining;
mod error;
mod exec;
mod savina;

pub use cloc::{cloc_invocation, CLOC_RAW_FILE};
pub use cores::{logical_cores, physical_cores};
pub use dining::{DiningCampaign, SPARSE_CORES};
pub use error::RunnerError;
pub use exec::Invocation;
pub use savina::SavinaCampaign;
