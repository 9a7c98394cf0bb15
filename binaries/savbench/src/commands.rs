//! One function per subcommand, dispatched from `main`.

use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use anyhow::Context;

use savbench_latex::{actor_table, full_table, summary_table};
use savbench_plot::{
    dining_chart, read_core_times, read_scale_rows, scale_chart, ChartFormat, DiningSeries,
};
use savbench_runner::{cloc_invocation, DiningCampaign, SavinaCampaign, CLOC_RAW_FILE};
use savbench_stats::{
    mean, std_dev, LocCounts, RuntimeMap, Summary, SummarySet, TimedRuns, BENCH_FILES,
};

use crate::{args::Command, config::Config};

pub(crate) fn dispatch(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Run {
            verona_path,
            pony_path,
            output,
            repeats,
        } => {
            let campaign = SavinaCampaign {
                verona_path: verona_path.unwrap_or_else(|| config.verona_path.clone()),
                pony_path: pony_path.unwrap_or_else(|| config.pony_path.clone()),
                out_dir: output.unwrap_or_else(|| config.output.clone()),
                repeats: repeats.unwrap_or(config.repeats),
            };
            campaign.run().context("savina campaign failed")?;
        }
        Command::RunDining {
            program,
            output,
            repeats,
        } => {
            let campaign = DiningCampaign {
                program,
                out_dir: output.unwrap_or_else(|| config.output.clone()),
                repeats: repeats.unwrap_or(config.repeats),
            };
            campaign.run().context("dining campaign failed")?;
        }
        Command::Table { input, json } => table(&input, json)?,
        Command::TableActor { input } => table_actor(&input)?,
        Command::TableFull { input } => table_full(&input)?,
        Command::PlotDining {
            input,
            output,
            png,
            fast,
        } => plot_dining(&input, &output, format_for(png), fast)?,
        Command::PlotScale { input, output, png } => {
            plot_scale(&input, &output, format_for(png))?;
        }
        Command::Loc { input } => loc(&input)?,
        Command::FilterRuns { file } => filter_runs(&file)?,
    }

    Ok(())
}

const fn format_for(png: bool) -> ChartFormat {
    if png {
        ChartFormat::Png
    } else {
        ChartFormat::Svg
    }
}

const fn extension(format: ChartFormat) -> &'static str {
    match format {
        ChartFormat::Svg => "svg",
        ChartFormat::Png => "png",
    }
}

/// The four summary sources every table starts from.
struct Sources {
    pony1: Summary,
    pony8: Summary,
    actor1: Summary,
    actor8: Summary,
    set: SummarySet,
}

impl Sources {
    fn read(input: &Path) -> anyhow::Result<Self> {
        let mut set = SummarySet::new();
        let pony1 = Summary::read(&input.join("pony1.csv"), &mut set)?;
        let pony8 = Summary::read(&input.join("pony8.csv"), &mut set)?;
        let actor1 = Summary::read(&input.join("boc_actor1.csv"), &mut set)?;
        let actor8 = Summary::read(&input.join("boc_actor8.csv"), &mut set)?;
        Ok(Self {
            pony1,
            pony8,
            actor1,
            actor8,
            set,
        })
    }
}

fn table(input: &Path, json: bool) -> anyhow::Result<()> {
    let s = Sources::read(input)?;

    if json {
        let dump = serde_json::json!({
            "pony1": s.pony1,
            "pony8": s.pony8,
            "boc_actor1": s.actor1,
            "boc_actor8": s.actor8,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!(
            "{}",
            summary_table(&[&s.pony1, &s.pony8, &s.actor1, &s.actor8], &s.set)
        );
    }

    Ok(())
}

fn table_actor(input: &Path) -> anyhow::Result<()> {
    let s = Sources::read(input)?;
    let stats = RuntimeMap::read(&input.join("actor_stats.csv"))?;

    print!(
        "{}",
        actor_table(&s.pony1, &s.pony8, &s.actor1, &s.actor8, &stats, &s.set)
    );

    Ok(())
}

fn table_full(input: &Path) -> anyhow::Result<()> {
    let mut set = SummarySet::new();
    let actor1 = Summary::read(&input.join("boc_actor1.csv"), &mut set)?;
    let actor8 = Summary::read(&input.join("boc_actor8.csv"), &mut set)?;
    let full1 = Summary::read(&input.join("boc_full1.csv"), &mut set)?;
    let full8 = Summary::read(&input.join("boc_full8.csv"), &mut set)?;
    let actor_stats = RuntimeMap::read(&input.join("actor_stats.csv"))?;
    let full_stats = RuntimeMap::read(&input.join("boc_stats.csv"))?;
    let loc = LocCounts::read(&input.join(CLOC_RAW_FILE))?;

    print!(
        "{}",
        full_table(
            &actor1,
            &actor8,
            &full1,
            &full8,
            &actor_stats,
            &full_stats,
            &loc,
            &set,
        )
    );

    Ok(())
}

fn plot_dining(
    input: &Path,
    output: &Path,
    format: ChartFormat,
    fast: bool,
) -> anyhow::Result<()> {
    let mut series = Vec::new();
    for (file, label) in [
        ("pthread_dining_opt.csv", "Threads and Mutex"),
        ("verona_dining_opt.csv", "Cowns and Behaviours"),
    ] {
        series.push(DiningSeries {
            label: label.to_string(),
            points: read_core_times(&input.join(file))?,
        });
    }

    fs::create_dir_all(output)?;
    let out = output.join(format!("dining_scale.{}", extension(format)));
    dining_chart(&series, &out, format, fast)?;
    tracing::info!("wrote {}", out.display());

    Ok(())
}

fn plot_scale(input: &Path, output: &Path, format: ChartFormat) -> anyhow::Result<()> {
    let rows = read_scale_rows(&input.join("banking_scale.csv"))?;

    fs::create_dir_all(output)?;
    let out = output.join(format!("scale.{}", extension(format)));
    scale_chart(&rows, &out, format)?;
    tracing::info!("wrote {}", out.display());

    Ok(())
}

fn loc(input: &Path) -> anyhow::Result<()> {
    let raw = input.join(CLOC_RAW_FILE);
    cloc_invocation(input, &raw)
        .run()
        .context("cloc failed")?;
    let counts = LocCounts::read(&raw)?;

    println!("benchmark,actor,full");
    for (benchmark, _) in BENCH_FILES {
        println!(
            "{benchmark},{},{}",
            count(counts.actor(benchmark)),
            count(counts.full(benchmark)),
        );
    }

    Ok(())
}

fn count(lines: Option<u64>) -> String {
    lines.map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn filter_runs(file: &Path) -> anyhow::Result<()> {
    let name = file.display().to_string();
    let runs = TimedRuns::from_reader(&name, BufReader::new(File::open(file)?))?;

    println!("ACT MEAN: {}", mean(&runs.act));
    println!("ACT STDV: {}", std_dev(&runs.act));
    println!("BOC MEAN: {}", mean(&runs.boc));
    println!("BOC STDV: {}", std_dev(&runs.boc));

    Ok(())
}
