//! The dining-philosophers scaling campaign.
//!
//! Unlike the savina suites, the measured binary does not report times; the
//! harness wall-clocks each child, setup and teardown included, and writes
//! `cores,time` rows itself. Five variants are measured so the scaling
//! chart can compare cown scheduling against pthread/mutex versions.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{cores::logical_cores, error::RunnerError, exec::Invocation};

/// Core counts for the sequential-cown variant. Sparse: that variant does
/// not scale, so dense sampling would only burn machine hours.
pub const SPARSE_CORES: [u32; 10] = [1, 2, 3, 4, 5, 10, 20, 40, 60, 72];

const PHILOSOPHERS: u32 = 100;
const HUNGER: u32 = 500;

/// One `cores,time` CSV in the making. Rows are flushed as written so a
/// killed campaign keeps everything measured so far.
struct CoreTimeFile {
    file: File,
}

impl CoreTimeFile {
    fn create(path: &Path) -> Result<Self, RunnerError> {
        let mut file = File::create(path)?;
        writeln!(file, "cores,time")?;
        Ok(Self { file })
    }

    fn record(&mut self, cores: u32, seconds: f64) -> Result<(), RunnerError> {
        writeln!(self.file, "{cores},{seconds}")?;
        self.file.flush()?;
        Ok(())
    }
}

/// The dining-philosophers campaign configuration.
#[derive(Debug, Clone)]
pub struct DiningCampaign {
    /// The dining-philosophers executable.
    pub program: PathBuf,
    /// Where the five CSV files land.
    pub out_dir: PathBuf,
    /// Full sweeps over the core range.
    pub repeats: u32,
}

impl DiningCampaign {
    /// Run every repeat of every variant; one timed child per row.
    pub fn run(&self) -> Result<(), RunnerError> {
        fs::create_dir_all(&self.out_dir)?;

        let mut opt = self.out_file("verona_dining_opt.csv")?;
        let mut opt_200 = self.out_file("verona_dining_opt_200.csv")?;
        let mut seq = self.out_file("verona_dining_seq.csv")?;
        let mut pthread_seq = self.out_file("pthread_dining_seq.csv")?;
        let mut pthread_opt = self.out_file("pthread_dining_opt.csv")?;

        for repeat in 0..self.repeats {
            for cores in 1..=logical_cores() {
                tracing::info!("{cores} cpus");
                self.time_into(&self.cown_invocation(cores, HUNGER, PHILOSOPHERS), cores, &mut opt)?;
                self.time_into(
                    &self.cown_invocation(cores, HUNGER / 2, PHILOSOPHERS * 2),
                    cores,
                    &mut opt_200,
                )?;
                self.time_into(&self.pthread_invocation(cores, false), cores, &mut pthread_seq)?;
                self.time_into(&self.pthread_invocation(cores, true), cores, &mut pthread_opt)?;
            }

            for cores in SPARSE_CORES {
                tracing::info!("{cores} cpus (sequential)");
                self.time_into(&self.sequential_invocation(cores), cores, &mut seq)?;
            }

            tracing::info!("done repeat {repeat}");
        }

        Ok(())
    }

    fn out_file(&self, name: &str) -> Result<CoreTimeFile, RunnerError> {
        CoreTimeFile::create(&self.out_dir.join(name))
    }

    fn time_into(
        &self,
        invocation: &Invocation,
        cores: u32,
        out: &mut CoreTimeFile,
    ) -> Result<(), RunnerError> {
        let elapsed = invocation.run_timed()?;
        out.record(cores, elapsed.as_secs_f64())
    }

    /// Cown-scheduled variant with optimal acquisition order.
    fn cown_invocation(&self, cores: u32, hunger: u32, philosophers: u32) -> Invocation {
        self.base_invocation(cores, hunger, philosophers).arg("--optimal_order").arg("1")
    }

    /// Cown-scheduled variant forced into sequential acquisition.
    fn sequential_invocation(&self, cores: u32) -> Invocation {
        self.base_invocation(cores, HUNGER, PHILOSOPHERS).arg("--test_no").arg("1")
    }

    /// Pthread/mutex variant, pinned so the kernel cannot spread it over
    /// more CPUs than the cown variant gets.
    fn pthread_invocation(&self, cores: u32, optimal: bool) -> Invocation {
        let mut invocation = self.base_invocation(cores, HUNGER, PHILOSOPHERS).arg("--pthread");
        if optimal {
            invocation = invocation.arg("--optimal_order");
        }
        invocation.pinned(cores)
    }

    fn base_invocation(&self, cores: u32, hunger: u32, philosophers: u32) -> Invocation {
        Invocation::new(self.program.display().to_string())
            .arg("--cores")
            .arg(cores.to_string())
            .arg("--hunger")
            .arg(hunger.to_string())
            .arg("--num_tables")
            .arg("1")
            .arg("--num_philosophers")
            .arg(philosophers.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn campaign() -> DiningCampaign {
        DiningCampaign {
            program: PathBuf::from("./perf-con-dining_phil"),
            out_dir: PathBuf::from("output"),
            repeats: 30,
        }
    }

    #[test]
    fn cown_argv_with_doubled_table() {
        let invocation = campaign().cown_invocation(4, HUNGER / 2, PHILOSOPHERS * 2);
        assert_eq!(invocation.program(), "./perf-con-dining_phil");
        assert_eq!(
            invocation.args(),
            [
                "--cores", "4", "--hunger", "250", "--num_tables", "1",
                "--num_philosophers", "200", "--optimal_order", "1",
            ]
        );
    }

    #[test]
    fn pthread_argv_is_pinned() {
        let invocation = campaign().pthread_invocation(8, true);
        assert_eq!(invocation.program(), "taskset");
        assert_eq!(&invocation.args()[..2], ["--cpu-list", "0-7"]);
        assert!(invocation.args().contains(&"--pthread".to_string()));
        assert!(invocation.args().contains(&"--optimal_order".to_string()));
    }

    #[test]
    fn sequential_argv_sets_test_number() {
        let invocation = campaign().sequential_invocation(1);
        let args = invocation.args();
        assert_eq!(&args[args.len() - 2..], ["--test_no", "1"]);
    }

    #[test]
    fn core_time_rows_flush_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let mut out = CoreTimeFile::create(&path).unwrap();
        out.record(1, 1.5).unwrap();
        out.record(2, 0.75).unwrap();
        // Readable before the writer is dropped.
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "cores,time\n1,1.5\n2,0.75\n"
        );
    }

    #[test]
    fn sparse_cores_are_ascending() {
        assert!(SPARSE_CORES.windows(2).all(|w| w[0] < w[1]));
    }
}
