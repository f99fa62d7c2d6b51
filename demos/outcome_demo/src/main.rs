//! Outcome demo entry-point: parse options, install logging, print the walkthrough.

use clap::Parser;

use outcome_demo::cli::DemoConfig;
use outcome_demo::error::Result;
use outcome_demo::logging::init_logging;
use outcome_demo::report::{print_report, walkthrough};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let config = DemoConfig::parse();
    init_logging(config.verbose)?;
    config.validate()?;
    let report = walkthrough(&config);
    print_report(&report)?;
    Ok(())
}
