use crate::analyzers::describe::{DescriptiveStatistics, STAT_NAMES};
use crate::error::Result;
use crate::utils::format::format_cell;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Writes the descriptive statistics table: statistics as rows, columns as columns,
/// and a leading unnamed index column holding the statistic name.
pub struct StatsWriter {
    delimiter: u8,
}

impl StatsWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn write_statistics(&self, stats: &DescriptiveStatistics, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(BufWriter::new(file));

        let mut header = vec![String::new()];
        header.extend(stats.columns.iter().map(|c| c.name.clone()));
        writer.write_record(&header)?;

        for (i, stat) in STAT_NAMES.iter().enumerate() {
            let mut row = vec![stat.to_string()];
            row.extend(stats.columns.iter().map(|c| format_cell(c.values()[i])));
            writer.write_record(&row)?;
        }

        writer.flush()?;
        debug!(path = %path.display(), columns = stats.columns.len(), "wrote statistics table");
        Ok(())
    }
}

impl Default for StatsWriter {
    fn default() -> Self {
        Self::new()
    }
}
