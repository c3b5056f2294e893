use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use validator::Validate;

use crate::analyzers::{CorrelationMatrix, DatasetSummary, DescriptiveStatistics};
use crate::charts::{ChartData, ChartKind};
use crate::error::{ReportError, Result};
use crate::models::{WEATHER_RECODING, WORKINGDAY_RECODING};
use crate::processors::views::{group_mean, recode};
use crate::readers::TableReader;
use crate::utils::constants::{COL_HOUR, COL_WEEKDAY, DESCRIBE_FILE};
use crate::utils::progress::ProgressReporter;
use crate::writers::marker::marker_path;
use crate::writers::{self_test, StatsWriter};

/// Where to read from, where to write to, and how hard to work.
#[derive(Debug, Clone, Validate)]
pub struct ReportConfig {
    pub input_file: PathBuf,
    pub output_path: PathBuf,
    #[validate(range(min = 1))]
    pub max_workers: usize,
    pub quiet: bool,
}

impl ReportConfig {
    pub fn new(input_file: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_path: output_path.into(),
            max_workers: num_cpus::get(),
            quiet: false,
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Paths of everything a successful run leaves behind.
#[derive(Debug, Clone, Serialize)]
pub struct ReportArtifacts {
    pub statistics: PathBuf,
    pub charts: Vec<PathBuf>,
    pub marker: PathBuf,
}

impl ReportArtifacts {
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.statistics.as_path())
            .chain(self.charts.iter().map(PathBuf::as_path))
            .chain(std::iter::once(self.marker.as_path()))
    }
}

pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the whole report: statistics table, printed summary, charts, marker.
    pub fn generate(&self) -> Result<ReportArtifacts> {
        let start = Instant::now();
        let output = self.config.output_path.as_path();

        fs::create_dir_all(output)?;
        info!(output = %output.display(), "output directory ready");

        let stages = ProgressReporter::new_spinner("Loading input table", self.config.quiet);
        let table = TableReader::new().read_table(&self.config.input_file)?;
        info!(
            rows = table.n_rows(),
            columns = table.n_cols(),
            input = %self.config.input_file.display(),
            "loaded input table"
        );

        stages.set_message("Describing numeric columns");
        let statistics = output.join(DESCRIBE_FILE);
        let stats = DescriptiveStatistics::from_table(&table)?;
        StatsWriter::new().write_statistics(&stats, &statistics)?;
        info!(path = %statistics.display(), "wrote descriptive statistics");

        let summary = DatasetSummary::from_table(&table)?;
        println!("{}", summary);
        debug!(summary = %serde_json::to_string(&summary)?, "dataset summary");

        stages.set_message("Deriving chart views");
        let by_hour = group_mean(&table, &[COL_WEEKDAY, COL_HOUR])?;
        let labelled = recode(&table, &[WORKINGDAY_RECODING, WEATHER_RECODING])?;
        let correlation = CorrelationMatrix::from_table(&table)?;
        debug!(
            groups = by_hour.n_rows(),
            variables = correlation.len(),
            "derived views ready"
        );
        debug!(
            correlations = %serde_json::to_string(&correlation.to_long())?,
            "correlation matrix"
        );
        stages.finish_with_message("Input analysed");

        let data = ChartData {
            table: &table,
            by_hour: &by_hour,
            labelled: &labelled,
            correlation: &correlation,
        };
        let charts = self.render_charts(&data, output)?;

        self_test(output)?;
        let marker = marker_path(output);

        info!(elapsed_ms = start.elapsed().as_millis() as u64, "report complete");
        Ok(ReportArtifacts {
            statistics,
            charts,
            marker,
        })
    }

    fn render_charts(&self, data: &ChartData<'_>, output: &Path) -> Result<Vec<PathBuf>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_workers)
            .build()
            .map_err(|e| ReportError::Config(e.to_string()))?;

        let progress = ProgressReporter::new(
            ChartKind::ALL.len() as u64,
            "Rendering charts",
            self.config.quiet,
        );

        let charts: Result<Vec<PathBuf>> = pool.install(|| {
            ChartKind::ALL
                .par_iter()
                .map(|kind| {
                    let path = kind.render(data, output)?;
                    progress.step_done(kind.file_name());
                    Ok(path)
                })
                .collect()
        });

        let charts = charts?;
        progress.finish_with_message(&format!("Rendered {} charts", charts.len()));
        Ok(charts)
    }
}

/// Generate the full report with default settings.
pub fn generate(input_file: &Path, output_path: &Path) -> Result<ReportArtifacts> {
    ReportGenerator::new(ReportConfig::new(input_file, output_path))?.generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_all_cpus() {
        let config = ReportConfig::new("hour.csv", "out");
        assert_eq!(config.max_workers, num_cpus::get());
        assert!(!config.quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = ReportConfig::new("hour.csv", "out").with_max_workers(0);
        assert!(matches!(
            ReportGenerator::new(config),
            Err(ReportError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ReportConfig::new(dir.path().join("absent.csv"), dir.path().join("out"))
            .with_quiet(true);
        let result = ReportGenerator::new(config).unwrap().generate();
        assert!(matches!(result, Err(ReportError::Io(_)) | Err(ReportError::Csv(_))));
    }

    #[test]
    fn test_artifact_paths_in_order() {
        let artifacts = ReportArtifacts {
            statistics: PathBuf::from("out/tab_1.csv"),
            charts: vec![PathBuf::from("out/fig_1_nulls.png")],
            marker: PathBuf::from("out/success.txt"),
        };
        let paths: Vec<&Path> = artifacts.paths().collect();
        assert_eq!(
            paths,
            vec![
                Path::new("out/tab_1.csv"),
                Path::new("out/fig_1_nulls.png"),
                Path::new("out/success.txt"),
            ]
        );
    }
}
