use std::io;

use thiserror::Error;

/// Errors from driving external benchmark programs.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The child ran but exited non-zero. Fatal: a failed benchmark run
    /// would leave a partial CSV behind, so the campaign stops here.
    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: String },
}
