use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::error::{ReportError, Result};
use crate::utils::format::format_float;

/// A single cell value. Integers and floats compare numerically with each other
/// so distinct-value listings sort the way a reader expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Int(_) | Scalar::Float(_) => 0,
            Scalar::Text(_) => 1,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }
}

impl std::hash::Hash for Scalar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Int(2) and Float(2.0) are equal, so both hash through the float bits.
        match self {
            Scalar::Int(v) => (*v as f64).to_bits().hash(state),
            Scalar::Float(v) => v.to_bits().hash(state),
            Scalar::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", format_float(*v)),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Int(_) | ColumnData::Float(_))
    }

    pub fn get(&self, row: usize) -> Option<Scalar> {
        match &self.data {
            ColumnData::Int(v) => v.get(row).copied().flatten().map(Scalar::Int),
            ColumnData::Float(v) => v.get(row).copied().flatten().map(Scalar::Float),
            ColumnData::Text(v) => v.get(row).cloned().flatten().map(Scalar::Text),
        }
    }

    /// Numeric view of the column; nulls stay `None`.
    pub fn to_f64(&self) -> Result<Vec<Option<f64>>> {
        match &self.data {
            ColumnData::Int(v) => Ok(v.iter().map(|c| c.map(|x| x as f64)).collect()),
            ColumnData::Float(v) => Ok(v.clone()),
            ColumnData::Text(_) => Err(ReportError::NonNumericColumn {
                column: self.name.clone(),
            }),
        }
    }

    /// Non-null numeric values in row order.
    pub fn numeric_values(&self) -> Result<Vec<f64>> {
        Ok(self.to_f64()?.into_iter().flatten().collect())
    }

    /// Text label for every row, used to split rows into facets.
    pub fn labels(&self) -> Vec<Option<String>> {
        (0..self.len())
            .map(|row| self.get(row).map(|v| v.to_string()))
            .collect()
    }

    pub fn null_mask(&self) -> Vec<bool> {
        match &self.data {
            ColumnData::Int(v) => v.iter().map(Option::is_none).collect(),
            ColumnData::Float(v) => v.iter().map(Option::is_none).collect(),
            ColumnData::Text(v) => v.iter().map(Option::is_none).collect(),
        }
    }

    /// Distinct non-null values in order of first appearance.
    pub fn unique(&self) -> Vec<Scalar> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for row in 0..self.len() {
            if let Some(value) = self.get(row) {
                if seen.insert(value.clone()) {
                    values.push(value);
                }
            }
        }
        values
    }

    pub fn sorted_unique(&self) -> Vec<Scalar> {
        let mut values = self.unique();
        values.sort();
        values
    }
}

/// Column-oriented table. Every column has the same number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(ReportError::InvalidFormat(format!(
                "Column '{}' has {} rows, expected {}",
                bad.name,
                bad.len(),
                n_rows
            )));
        }

        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ReportError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }

    /// Swap the data of an existing column, keeping its position.
    pub fn replace_column(&mut self, name: &str, data: ColumnData) -> Result<()> {
        if data.len() != self.n_rows {
            return Err(ReportError::InvalidFormat(format!(
                "Replacement for column '{}' has {} rows, expected {}",
                name,
                data.len(),
                self.n_rows
            )));
        }

        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ReportError::ColumnNotFound {
                column: name.to_string(),
            })?;
        column.data = data;
        Ok(())
    }
}
