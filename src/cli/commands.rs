use tracing::info;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::ReportGenerator;

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    info!(
        input = %config.input_file.display(),
        output = %config.output_path.display(),
        workers = config.max_workers,
        "generating report"
    );

    let artifacts = ReportGenerator::new(config)?.generate()?;

    for path in artifacts.paths() {
        info!(path = %path.display(), "artifact written");
    }
    Ok(())
}
