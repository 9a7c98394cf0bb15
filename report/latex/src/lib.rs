//! # LaTeX table rendering
//!
//! Turns the aggregated summary/stats maps into LaTeX table-body
//! fragments (rows only; the surrounding `tabular` lives in the paper).
//!
//! Markup rules, shared by every table:
//! - a benchmark absent from a source renders as the placeholder `-`;
//! - the cell whose mean equals the cross-source minimum for that
//!   benchmark is highlighted (bold, or underline+bold);
//! - values are rounded against per-column limits
//!   ([`savbench_stats::round_limited`]).

mod entry;
mod tables;

pub use entry::Limits;
pub use tables::{actor_table, full_table, summary_table};
