//! `cloc` driver for the lines-of-code comparison.
//!
//! The parse of the by-file CSV lives in `savbench_stats::LocCounts`;
//! this module only assembles the command.

use std::path::Path;

use crate::exec::Invocation;

/// File name `cloc` writes its by-file CSV into.
pub const CLOC_RAW_FILE: &str = "cloc_raw.csv";

/// The `cloc` command line: by-file CSV restricted to the `actors/` and
/// `boc/` encodings, written to `out`.
pub fn cloc_invocation(dir: &Path, out: &Path) -> Invocation {
    Invocation::new("cloc")
        .arg(dir.display().to_string())
        .arg("--match-d=actors|boc")
        .arg("--by-file")
        .arg("--quiet")
        .arg("--csv")
        .arg(format!("--out={}", out.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cloc_argv() {
        let invocation = cloc_invocation(Path::new("."), Path::new("output/cloc_raw.csv"));
        assert_eq!(invocation.program(), "cloc");
        assert_eq!(
            invocation.args(),
            [
                ".",
                "--match-d=actors|boc",
                "--by-file",
                "--quiet",
                "--csv",
                "--out=output/cloc_raw.csv",
            ]
        );
    }
}
