//! savbench config.
//!
//! Everything here can also be set per invocation with flags; flags win.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Config file searched for in the current directory when no
/// `--config-file` is given.
pub(crate) const DEFAULT_CONFIG_FILE_NAME: &str = "savbench.toml";

/// Paths and defaults shared by the campaign subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub(crate) struct Config {
    /// Directory containing the `savina` and `savina-stats` executables.
    pub(crate) verona_path: PathBuf,
    /// Directory containing the `savina-pony` executable.
    pub(crate) pony_path: PathBuf,
    /// Directory the campaign CSV files are written to.
    pub(crate) output: PathBuf,
    /// Number of times to repeat the runs.
    pub(crate) repeats: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verona_path: ".".into(),
            pony_path: ".".into(),
            output: "./output".into(),
            repeats: 30,
        }
    }
}

impl Config {
    /// The explicit file if given, else [`DEFAULT_CONFIG_FILE_NAME`] in
    /// the current directory if it exists, else the defaults.
    pub(crate) fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        match file {
            Some(path) => Self::read_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE_NAME);
                if path.exists() {
                    Self::read_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read_from_path(path: &Path) -> anyhow::Result<Self> {
        let text = read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
