use crate::error::Result;
use crate::models::Table;
use crate::utils::constants::CORRELATION_DECIMALS;
use serde::Serialize;

/// Pairwise Pearson correlation between the numeric columns of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

/// One cell of the matrix in long form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationEntry {
    pub var1: String,
    pub var2: String,
    pub correlation: f64,
}

impl CorrelationMatrix {
    /// Correlate every pair of numeric columns using the rows where both are
    /// present. Values are rounded; the diagonal is exactly 1.
    pub fn from_table(table: &Table) -> Result<Self> {
        let columns = table.numeric_columns();
        let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
        let data = columns
            .iter()
            .map(|c| c.to_f64())
            .collect::<Result<Vec<_>>>()?;

        let n = names.len();
        let mut values = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = round_to(pearson(&data[i], &data[j]), CORRELATION_DECIMALS);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self { names, values })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn get(&self, var1: &str, var2: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == var1)?;
        let j = self.names.iter().position(|n| n == var2)?;
        Some(self.values[i][j])
    }

    /// Smallest and largest defined coefficient.
    pub fn extent(&self) -> (f64, f64) {
        self.values
            .iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Long form, one entry per (Var1, Var2) pair, grouped by Var2.
    pub fn to_long(&self) -> Vec<CorrelationEntry> {
        let mut entries = Vec::with_capacity(self.len() * self.len());
        for (j, var2) in self.names.iter().enumerate() {
            for (i, var1) in self.names.iter().enumerate() {
                entries.push(CorrelationEntry {
                    var1: var1.clone(),
                    var2: var2.clone(),
                    correlation: self.values[i][j],
                });
            }
        }
        entries
    }
}

/// Pearson correlation over rows where both series have a value. NaN when fewer
/// than two such rows exist or either side is constant.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
