//! One external program invocation.

use std::{
    fs::File,
    path::Path,
    process::{Command, Stdio},
    time::{Duration, Instant},
};

use crate::error::RunnerError;

/// A fully assembled command line for one benchmark run.
///
/// Built up front so the argv can be inspected (and tested) before anything
/// is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Wrap the invocation in `taskset --cpu-list 0-(n-1)`, pinning the
    /// child to the first `cores` CPUs.
    pub fn pinned(self, cores: u32) -> Self {
        let mut pinned = Self::new("taskset")
            .arg("--cpu-list")
            .arg(format!("0-{}", cores - 1))
            .arg(self.program);
        pinned.args.extend(self.args);
        pinned
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run to completion, inheriting stdio. Non-zero exit is an error.
    pub fn run(&self) -> Result<(), RunnerError> {
        self.wait(self.command())?;
        Ok(())
    }

    /// Run with stdout and stderr redirected into `outfile`.
    pub fn run_to_file(&self, outfile: &Path) -> Result<(), RunnerError> {
        let file = File::create(outfile)?;
        let stderr = file.try_clone()?;

        let mut command = self.command();
        command.stdout(Stdio::from(file)).stderr(Stdio::from(stderr));
        self.wait(command)
    }

    /// Run to completion and return the child's wall-clock time.
    ///
    /// This measures the whole process lifetime, setup and teardown
    /// included; that is the point for the dining campaign.
    pub fn run_timed(&self) -> Result<Duration, RunnerError> {
        let start = Instant::now();
        self.wait(self.command())?;
        Ok(start.elapsed())
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    fn wait(&self, mut command: Command) -> Result<(), RunnerError> {
        tracing::debug!("running `{}`", self.display());

        let status = command.status().map_err(|source| RunnerError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunnerError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }

    /// The command line as one string, for logs and errors.
    pub fn display(&self) -> String {
        let mut s = self.program.clone();
        for arg in &self.args {
            s.push(' ');
            s.push_str(arg);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pinning_wraps_in_taskset() {
        let invocation = Invocation::new("./bench").arg("--cores").arg("4").pinned(4);
        assert_eq!(invocation.program(), "taskset");
        assert_eq!(
            invocation.args(),
            ["--cpu-list", "0-3", "./bench", "--cores", "4"]
        );
    }

    #[test]
    fn display_joins_argv() {
        let invocation = Invocation::new("cloc").arg(".").arg("--csv");
        assert_eq!(invocation.display(), "cloc . --csv");
    }

    #[test]
    fn nonzero_exit_is_fatal() {
        let err = Invocation::new("false").run().unwrap_err();
        assert!(matches!(err, RunnerError::Failed { .. }));
    }

    #[test]
    fn run_to_file_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        Invocation::new("echo").arg("cores,time").run_to_file(&out).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "cores,time\n");
    }
}
