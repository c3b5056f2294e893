use anyhow::Context;
use bike_eda::cli::{init_logging, run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref()).context("failed to initialise logging")?;
    run(cli).context("report generation failed")
}
