use std::io;

use thiserror::Error;

/// Errors from reading chart CSVs or rendering charts.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{file}:{line}: {msg}")]
    Parse {
        file: String,
        line: usize,
        msg: String,
    },
    /// Backend drawing failure, stringly typed: the backend error type is
    /// generic and never recoverable here.
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("no rows to plot")]
    NoData,
}

impl PlotError {
    pub(crate) fn parse(file: &str, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_string(),
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn draw(e: impl std::fmt::Display) -> Self {
        Self::Draw(e.to_string())
    }
}
