use crate::error::{ReportError, Result};
use crate::models::{Column, ColumnData, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub struct TableReader {
    delimiter: u8,
}

impl TableReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a delimited text file with a header row into a typed table
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)?;
        let table = self.read_from(file)?;
        debug!(
            path = %path.display(),
            rows = table.n_rows(),
            columns = table.n_cols(),
            "loaded input table"
        );
        Ok(table)
    }

    pub fn read_from<R: Read>(&self, source: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(ReportError::InvalidFormat(
                "Input has no header row".to_string(),
            ));
        }

        // Collect raw cells column by column; the csv reader rejects ragged rows.
        let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (cells, field) in raw.iter_mut().zip(record.iter()) {
                cells.push(field.to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw)
            .map(|(name, cells)| Column::new(name, infer_column(&cells)))
            .collect();

        Table::new(columns)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_null(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("nan") || cell.eq_ignore_ascii_case("na")
}

/// Integer if every non-null cell parses as i64, float if every one parses as f64,
/// text otherwise.
fn infer_column(cells: &[String]) -> ColumnData {
    let present = || cells.iter().filter(|c| !is_null(c));

    if present().all(|c| c.parse::<i64>().is_ok()) {
        return ColumnData::Int(
            cells
                .iter()
                .map(|c| if is_null(c) { None } else { c.parse().ok() })
                .collect(),
        );
    }

    if present().all(|c| c.parse::<f64>().is_ok()) {
        return ColumnData::Float(
            cells
                .iter()
                .map(|c| if is_null(c) { None } else { c.parse().ok() })
                .collect(),
        );
    }

    ColumnData::Text(
        cells
            .iter()
            .map(|c| if c.is_empty() { None } else { Some(c.clone()) })
            .collect(),
    )
}
