#![doc = include_str!("../README.md")]

mod args;
mod commands;
mod config;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();

    logging::init_logger(args.verbose);

    let config = config::Config::load(args.config_file.as_deref())?;

    commands::dispatch(args.command, &config)
}
