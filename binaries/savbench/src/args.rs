use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// `savbench` args.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// More log output; repeat for more.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    /// The PATH of the `savbench` config file.
    #[arg(long, global = true)]
    pub(crate) config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Run the full savina measurement campaign.
    Run {
        /// Directory containing the `savina` and `savina-stats` executables.
        #[arg(long)]
        verona_path: Option<PathBuf>,
        /// Directory containing the `savina-pony` executable.
        #[arg(long)]
        pony_path: Option<PathBuf>,
        /// Directory the CSV files are written to.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of times to repeat the runs.
        #[arg(long)]
        repeats: Option<u32>,
    },

    /// Run the dining-philosophers scaling campaign.
    RunDining {
        /// The dining-philosophers executable.
        program: PathBuf,
        /// Directory the CSV files are written to.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of full sweeps over the core range.
        #[arg(long)]
        repeats: Option<u32>,
    },

    /// Print the Pony/BoC-actor summary table.
    Table {
        /// Directory containing the campaign CSV files.
        #[arg(short, long, default_value = "./output")]
        input: PathBuf,
        /// Dump the aggregated stats as JSON instead of LaTeX.
        #[arg(long)]
        json: bool,
    },

    /// Print the actor comparison table with runtime counters.
    TableActor {
        /// Directory containing the campaign CSV files.
        #[arg(short, long, default_value = "./output")]
        input: PathBuf,
    },

    /// Print the actor-vs-full-BoC table with line counts.
    TableFull {
        /// Directory containing the campaign CSV files.
        #[arg(short, long, default_value = "./output")]
        input: PathBuf,
    },

    /// Render the dining-philosophers scaling chart.
    PlotDining {
        /// Directory containing the dining CSV files.
        #[arg(short, long, default_value = "./output")]
        input: PathBuf,
        /// Directory the chart is written to.
        #[arg(short, long, default_value = "./results")]
        output: PathBuf,
        /// Render a PNG instead of an SVG.
        #[arg(long)]
        png: bool,
        /// The campaign was run with reduced work.
        #[arg(long)]
        fast: bool,
    },

    /// Render the banking scale box plot.
    PlotScale {
        /// Directory containing the campaign CSV files.
        #[arg(short, long, default_value = "./output")]
        input: PathBuf,
        /// Directory the chart is written to.
        #[arg(short, long, default_value = "./results")]
        output: PathBuf,
        /// Render a PNG instead of an SVG.
        #[arg(long)]
        png: bool,
    },

    /// Count benchmark source lines with `cloc`.
    ///
    /// Run from the benchmark source tree: files are attributed to
    /// benchmarks through their `actors/` and `boc/` paths.
    Loc {
        /// The source tree to count.
        #[arg(short, long, default_value = ".")]
        input: PathBuf,
    },

    /// Print mean and standard deviation of a `boc:`/`act:` timing log.
    FilterRuns {
        /// The log file.
        file: PathBuf,
    },
}
