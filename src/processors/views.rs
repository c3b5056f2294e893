use crate::error::{ReportError, Result};
use crate::models::{Column, ColumnData, Recoding, Scalar, Table};
use std::collections::BTreeMap;

/// Group rows by the key columns and average every other numeric column.
/// Groups come out sorted by key; rows with a null key are dropped.
pub fn group_mean(table: &Table, keys: &[&str]) -> Result<Table> {
    let key_columns = keys
        .iter()
        .map(|k| table.column(k))
        .collect::<Result<Vec<_>>>()?;

    let value_columns: Vec<&Column> = table
        .numeric_columns()
        .into_iter()
        .filter(|c| !keys.contains(&c.name.as_str()))
        .collect();
    let value_data = value_columns
        .iter()
        .map(|c| c.to_f64())
        .collect::<Result<Vec<_>>>()?;

    // key -> per value column (sum, count)
    let mut groups: BTreeMap<Vec<Scalar>, Vec<(f64, usize)>> = BTreeMap::new();
    for row in 0..table.n_rows() {
        let key: Option<Vec<Scalar>> = key_columns.iter().map(|c| c.get(row)).collect();
        let Some(key) = key else { continue };

        let sums = groups
            .entry(key)
            .or_insert_with(|| vec![(0.0, 0); value_columns.len()]);
        for (acc, data) in sums.iter_mut().zip(&value_data) {
            if let Some(v) = data[row] {
                acc.0 += v;
                acc.1 += 1;
            }
        }
    }

    let mut columns = Vec::with_capacity(keys.len() + value_columns.len());
    for (k, key_column) in key_columns.iter().enumerate() {
        let cells = groups.keys().map(|key| key[k].clone());
        columns.push(Column::new(
            key_column.name.clone(),
            collect_key_cells(&key_column.data, cells)?,
        ));
    }
    for (v, value_column) in value_columns.iter().enumerate() {
        let means = groups
            .values()
            .map(|sums| {
                let (sum, count) = sums[v];
                (count > 0).then(|| sum / count as f64)
            })
            .collect();
        columns.push(Column::new(value_column.name.clone(), ColumnData::Float(means)));
    }

    Table::new(columns)
}

fn collect_key_cells(
    source: &ColumnData,
    cells: impl Iterator<Item = Scalar>,
) -> Result<ColumnData> {
    let data = match source {
        ColumnData::Int(_) => ColumnData::Int(
            cells
                .map(|c| match c {
                    Scalar::Int(v) => Ok(Some(v)),
                    other => Err(unexpected_key(&other)),
                })
                .collect::<Result<_>>()?,
        ),
        ColumnData::Float(_) => ColumnData::Float(cells.map(|c| c.as_f64()).collect()),
        ColumnData::Text(_) => ColumnData::Text(cells.map(|c| Some(c.to_string())).collect()),
    };
    Ok(data)
}

fn unexpected_key(value: &Scalar) -> ReportError {
    ReportError::InvalidFormat(format!("Unexpected group key value: {}", value))
}

/// Deep copy of the table with the recoded columns replaced by their labels.
/// The source table is left untouched.
pub fn recode(table: &Table, recodings: &[Recoding]) -> Result<Table> {
    let mut view = table.clone();
    for recoding in recodings {
        let column = table.column(recoding.column)?;
        let labels = (0..column.len())
            .map(|row| {
                column.get(row).map(|value| {
                    let code = match value {
                        Scalar::Int(v) => Some(v),
                        Scalar::Float(v) if v.fract() == 0.0 => Some(v as i64),
                        _ => None,
                    };
                    code.and_then(|c| recoding.label(c))
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string())
                })
            })
            .collect();
        view.replace_column(recoding.column, ColumnData::Text(labels))?;
    }
    Ok(view)
}
