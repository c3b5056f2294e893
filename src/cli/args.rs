use clap::Parser;
use std::path::PathBuf;

use crate::processors::ReportConfig;

#[derive(Parser, Debug)]
#[command(name = "bike-eda")]
#[command(about = "Exploratory report for hourly bike-share rentals")]
#[command(version)]
pub struct Cli {
    #[arg(
        long = "input_file",
        alias = "input-file",
        help = "CSV file with hourly rental observations"
    )]
    pub input_file: PathBuf,

    #[arg(
        long = "output_path",
        alias = "output-path",
        help = "Directory for the statistics table, figures and success marker"
    )]
    pub output_path: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = num_cpus::get(), help = "Threads used to render charts")]
    pub max_workers: usize,

    #[arg(short, long, help = "Hide the progress bar")]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> ReportConfig {
        ReportConfig::new(&self.input_file, &self.output_path)
            .with_max_workers(self.max_workers)
            .with_quiet(self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_snake_case_flags() {
        let cli = Cli::try_parse_from([
            "bike-eda",
            "--input_file",
            "data/hour.csv",
            "--output_path",
            "reports",
        ])
        .unwrap();
        assert_eq!(cli.input_file, PathBuf::from("data/hour.csv"));
        assert_eq!(cli.output_path, PathBuf::from("reports"));
        assert!(!cli.verbose);
        assert_eq!(cli.max_workers, num_cpus::get());
    }

    #[test]
    fn test_kebab_case_aliases_and_options() {
        let cli = Cli::try_parse_from([
            "bike-eda",
            "--input-file",
            "hour.csv",
            "--output-path",
            "out",
            "-v",
            "--max-workers",
            "2",
            "--quiet",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.output_path, PathBuf::from("out"));
        assert_eq!(config.max_workers, 2);
        assert!(config.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_both_paths_required() {
        assert!(Cli::try_parse_from(["bike-eda", "--input_file", "hour.csv"]).is_err());
    }
}
