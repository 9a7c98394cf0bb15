//! The savina campaign: stats passes, the banking scale run, then the
//! Pony / BoC suites on fixed core counts.

use std::{fs, path::PathBuf};

use crate::{
    cores::{logical_cores, physical_cores},
    error::RunnerError,
    exec::Invocation,
};

/// Core counts the suites are compared on.
const CORE_COUNTS: [u32; 2] = [1, 8];

/// Repeats for the banking scale run; fixed, independent of `repeats`.
const SCALE_REPS: u32 = 50;

/// Which side of the runtime the `savina` binary should exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suite {
    /// Classic actor encodings.
    Actor,
    /// Full behaviour-oriented encodings.
    Full,
}

impl Suite {
    const fn flag(self) -> &'static str {
        match self {
            Self::Actor => "--actor",
            Self::Full => "--full",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Full => "full",
        }
    }

    const fn file_stem(self) -> &'static str {
        match self {
            Self::Actor => "boc_actor",
            Self::Full => "boc_full",
        }
    }

    const fn stats_file(self) -> &'static str {
        match self {
            Self::Actor => "actor_stats.csv",
            Self::Full => "boc_stats.csv",
        }
    }
}

/// One full savina measurement campaign.
#[derive(Debug, Clone)]
pub struct SavinaCampaign {
    /// Directory containing the `savina` and `savina-stats` executables.
    pub verona_path: PathBuf,
    /// Directory containing the `savina-pony` executable.
    pub pony_path: PathBuf,
    /// Where the CSV files land.
    pub out_dir: PathBuf,
    /// Repeats per benchmark per suite.
    pub repeats: u32,
}

impl SavinaCampaign {
    /// Run the whole campaign, writing one CSV per suite/core-count pair.
    ///
    /// CSVs are the children's stdout; they already carry the summary
    /// schema. Any child failing aborts the campaign.
    pub fn run(&self) -> Result<(), RunnerError> {
        fs::create_dir_all(&self.out_dir)?;

        // Cown/behaviour counts first; single core, single rep.
        for suite in [Suite::Actor, Suite::Full] {
            self.stats_invocation(suite)
                .run_to_file(&self.out_dir.join(suite.stats_file()))?;
        }

        tracing::info!("running banking scale on {} cores", logical_cores());
        self.scale_invocation()
            .run_to_file(&self.out_dir.join("banking_scale.csv"))?;

        for cores in CORE_COUNTS {
            self.run_pony(cores)?;
        }
        for suite in [Suite::Full, Suite::Actor] {
            for cores in CORE_COUNTS {
                tracing::info!("running boc ({}) on {cores} cores", suite.name());
                self.suite_invocation(suite, cores)
                    .run_to_file(&self.out_dir.join(format!("{}{cores}.csv", suite.file_stem())))?;
            }
        }

        Ok(())
    }

    fn run_pony(&self, cores: u32) -> Result<(), RunnerError> {
        let physical = physical_cores();
        if physical < cores {
            tracing::info!(
                "skipping Pony on {cores} cores as we only have {physical} physical cores"
            );
            return Ok(());
        }

        tracing::info!("running Pony on {cores} cores");
        self.pony_invocation(cores)
            .run_to_file(&self.out_dir.join(format!("pony{cores}.csv")))
    }

    fn suite_invocation(&self, suite: Suite, cores: u32) -> Invocation {
        Invocation::new(self.verona_path.join("savina").display().to_string())
            .arg(suite.flag())
            .arg("--csv")
            .arg("--cores")
            .arg(cores.to_string())
            .arg("--reps")
            .arg(self.repeats.to_string())
    }

    fn stats_invocation(&self, suite: Suite) -> Invocation {
        Invocation::new(self.verona_path.join("savina-stats").display().to_string())
            .arg("--cores")
            .arg("1")
            .arg("--reps")
            .arg("1")
            .arg(suite.flag())
    }

    fn scale_invocation(&self) -> Invocation {
        Invocation::new(self.verona_path.join("savina").display().to_string())
            .arg("--scale")
            .arg("--csv")
            .arg("--cores")
            .arg(logical_cores().to_string())
            .arg("--reps")
            .arg(SCALE_REPS.to_string())
    }

    fn pony_invocation(&self, cores: u32) -> Invocation {
        Invocation::new(self.pony_path.join("savina-pony").display().to_string())
            .arg("--parseable")
            .arg("--ponymaxthreads")
            .arg(cores.to_string())
            .arg("--reps")
            .arg(self.repeats.to_string())
    }
}
