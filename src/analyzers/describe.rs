use crate::error::Result;
use crate::models::Table;
use serde::Serialize;

/// Row labels of the descriptive statistics table, in output order.
pub const STAT_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                name: name.to_string(),
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        // Sample standard deviation; undefined for a single observation.
        let std = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            name: name.to_string(),
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Values in `STAT_NAMES` order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Quantile of sorted data with linear interpolation between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveStatistics {
    pub columns: Vec<ColumnStats>,
}

impl DescriptiveStatistics {
    /// Describe every numeric column of the table, skipping nulls
    pub fn from_table(table: &Table) -> Result<Self> {
        let columns = table
            .numeric_columns()
            .into_iter()
            .map(|column| Ok(ColumnStats::from_values(&column.name, &column.numeric_values()?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns })
    }

    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }
}
