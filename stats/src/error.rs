use std::io;

use thiserror::Error;

/// Errors from reading or writing benchmark CSV files.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{file}:{line}: {msg}")]
    Parse {
        /// File the row came from.
        file: String,
        /// 1-based line number.
        line: usize,
        msg: String,
    },
}

impl StatsError {
    pub(crate) fn parse(file: &str, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_string(),
            line,
            msg: msg.into(),
        }
    }
}
