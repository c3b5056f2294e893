use crate::error::{ReportError, Result};
use crate::models::{Scalar, Table};
use crate::utils::constants::{
    COL_COUNT, COL_HOLIDAY, COL_HOUR, COL_MONTH, COL_TEMP, COL_WEATHER, COL_WEEKDAY,
    COL_WINDSPEED, COL_WORKINGDAY,
};
use crate::utils::format::{format_list, format_names};
use serde::Serialize;
use std::fmt;

/// Smallest and largest distinct value of a column plus the number of distinct values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: Scalar,
    pub max: Scalar,
    pub distinct: usize,
}

impl ValueRange {
    pub fn of(table: &Table, column: &str) -> Result<Self> {
        let values = table.column(column)?.sorted_unique();
        match (values.first(), values.last()) {
            (Some(min), Some(max)) => Ok(Self {
                min: min.clone(),
                max: max.clone(),
                distinct: values.len(),
            }),
            _ => Err(ReportError::InvalidFormat(format!(
                "Column '{}' has no values",
                column
            ))),
        }
    }
}

/// The fixed set of facts printed about the dataset before charting.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub columns: Vec<String>,
    pub months: ValueRange,
    pub hours: ValueRange,
    pub holidays: Vec<Scalar>,
    pub weekdays: Vec<Scalar>,
    pub workingdays: Vec<Scalar>,
    pub weather: Vec<Scalar>,
    pub temperature: ValueRange,
    /// Taken from the temperature column, as every published run of this report did.
    pub humidity_from_temp: ValueRange,
    pub windspeed: ValueRange,
    pub count: ValueRange,
}

impl DatasetSummary {
    pub fn from_table(table: &Table) -> Result<Self> {
        Ok(Self {
            columns: table.column_names().iter().map(|c| c.to_string()).collect(),
            months: ValueRange::of(table, COL_MONTH)?,
            hours: ValueRange::of(table, COL_HOUR)?,
            holidays: table.column(COL_HOLIDAY)?.unique(),
            weekdays: table.column(COL_WEEKDAY)?.sorted_unique(),
            workingdays: table.column(COL_WORKINGDAY)?.sorted_unique(),
            weather: table.column(COL_WEATHER)?.unique(),
            temperature: ValueRange::of(table, COL_TEMP)?,
            humidity_from_temp: ValueRange::of(table, COL_TEMP)?,
            windspeed: ValueRange::of(table, COL_WINDSPEED)?,
            count: ValueRange::of(table, COL_COUNT)?,
        })
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        writeln!(f, "\nThe dataframe columns are:  {}", format_names(&names))?;
        writeln!(f, "\nGeneral information about the dataset:")?;
        writeln!(
            f,
            "- The month ranges from {} to {}, which represents the {} months of the year.",
            self.months.min, self.months.max, self.months.distinct
        )?;
        writeln!(
            f,
            "- The hour ranges from {} to {}, that represents the {} hours of the day.",
            self.hours.min, self.hours.max, self.hours.distinct
        )?;
        writeln!(f, "- The holiday type contains:  {}", format_list(&self.holidays))?;
        writeln!(f, "- The weekday type contains:  {}", format_list(&self.weekdays))?;
        writeln!(
            f,
            "- The workingday type contains:  {}",
            format_list(&self.workingdays)
        )?;
        writeln!(f, "- The weather type contains:  {}", format_list(&self.weather))?;
        writeln!(
            f,
            "- The normalized temperature ranges from {} to {}",
            self.temperature.min, self.temperature.max
        )?;
        writeln!(
            f,
            "- The normalized humidity ranges from {} to {}",
            self.humidity_from_temp.min, self.humidity_from_temp.max
        )?;
        writeln!(
            f,
            "- The normalized windspeed ranges from {} to {}",
            self.windspeed.min, self.windspeed.max
        )?;
        writeln!(
            f,
            "- The target count of bike rentals ranges from {} to {} users.",
            self.count.min, self.count.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ColumnData};

    fn hourly_table() -> Table {
        let rows = 24;
        let int_col = |name: &str, f: &dyn Fn(i64) -> i64| {
            Column::new(name, ColumnData::Int((0..rows).map(|i| Some(f(i))).collect()))
        };
        let float_col = |name: &str, f: &dyn Fn(i64) -> f64| {
            Column::new(
                name,
                ColumnData::Float((0..rows).map(|i| Some(f(i))).collect()),
            )
        };

        Table::new(vec![
            int_col("mnth", &|i| i % 12 + 1),
            int_col("hr", &|i| i),
            int_col("holiday", &|i| i64::from(i == 5)),
            int_col("weekday", &|i| (i + 3) % 7),
            int_col("workingday", &|i| i % 2),
            int_col("weathersit", &|i| 3 - i % 3),
            float_col("temp", &|i| (i + 1) as f64 / 50.0),
            float_col("hum", &|i| 0.9 - 0.01 * i as f64),
            float_col("windspeed", &|i| 0.1 * (i % 4) as f64),
            int_col("cnt", &|i| 10 * (i + 1)),
        ])
        .unwrap()
    }

    #[test]
    fn test_hour_range_reports_full_day() -> Result<()> {
        let summary = DatasetSummary::from_table(&hourly_table())?;
        assert_eq!(summary.hours.min, Scalar::Int(0));
        assert_eq!(summary.hours.max, Scalar::Int(23));
        assert_eq!(summary.hours.distinct, 24);

        let text = summary.to_string();
        assert!(text.contains("The hour ranges from 0 to 23, that represents the 24 hours"));
        assert!(text.contains("which represents the 12 months of the year"));
        Ok(())
    }

    #[test]
    fn test_category_listings() -> Result<()> {
        let summary = DatasetSummary::from_table(&hourly_table())?;
        assert_eq!(summary.holidays, vec![Scalar::Int(0), Scalar::Int(1)]);
        assert_eq!(
            summary.weather,
            vec![Scalar::Int(3), Scalar::Int(2), Scalar::Int(1)]
        );
        assert_eq!(summary.weekdays.len(), 7);
        assert_eq!(summary.weekdays[0], Scalar::Int(0));
        Ok(())
    }

    #[test]
    fn test_humidity_line_mirrors_temperature() -> Result<()> {
        let summary = DatasetSummary::from_table(&hourly_table())?;
        assert_eq!(summary.humidity_from_temp, summary.temperature);
        assert!(summary
            .to_string()
            .contains("- The normalized humidity ranges from 0.02 to 0.48"));
        Ok(())
    }

    #[test]
    fn test_missing_column_fails() {
        let table = Table::new(vec![Column::new("hr", ColumnData::Int(vec![Some(0)]))]).unwrap();
        let result = DatasetSummary::from_table(&table);
        assert!(matches!(result, Err(ReportError::ColumnNotFound { .. })));
    }
}
