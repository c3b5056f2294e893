//! The fixed set of report figures, rendered with plotters to PNG.

pub mod correlation_heatmap;
pub mod hour_heatmap;
pub mod nulls;
pub mod palette;
pub mod scatter;
pub mod strip;
pub mod style;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analyzers::CorrelationMatrix;
use crate::error::Result;
use crate::models::bike::{weekday_from_code, weekday_name, WEEK_ORDER};
use crate::models::{Scalar, Table};
use crate::utils::constants::*;
use scatter::{facets_by, FacetScatter};
use strip::Strip;

/// Everything the charts read. Nothing here is mutated while rendering.
pub struct ChartData<'a> {
    pub table: &'a Table,
    /// Mean of every numeric column per (weekday, hr).
    pub by_hour: &'a Table,
    /// Copy of `table` with working-day and weather codes replaced by labels.
    pub labelled: &'a Table,
    pub correlation: &'a CorrelationMatrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Nulls,
    TemperatureByWeekday,
    TemperatureByWorkingDay,
    HourHeatmap,
    HumidityByWeather,
    WeatherStrip,
    Correlation,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Nulls,
        ChartKind::TemperatureByWeekday,
        ChartKind::TemperatureByWorkingDay,
        ChartKind::HourHeatmap,
        ChartKind::HumidityByWeather,
        ChartKind::WeatherStrip,
        ChartKind::Correlation,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Nulls => FIG_NULLS,
            ChartKind::TemperatureByWeekday => FIG_TEMP_WEEKDAY,
            ChartKind::TemperatureByWorkingDay => FIG_TEMP_WORKINGDAY,
            ChartKind::HourHeatmap => FIG_HOUR_HEATMAP,
            ChartKind::HumidityByWeather => FIG_HUMIDITY_WEATHER,
            ChartKind::WeatherStrip => FIG_WEATHER_STRIP,
            ChartKind::Correlation => FIG_CORRELATION,
        }
    }

    /// Render this figure into `output_dir`, returning the written path.
    pub fn render(self, data: &ChartData<'_>, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(self.file_name());
        debug!(chart = ?self, path = %path.display(), "rendering chart");

        match self {
            ChartKind::Nulls => nulls::render(data.table, &path)?,
            ChartKind::TemperatureByWeekday => {
                let order: Vec<String> = WEEK_ORDER
                    .iter()
                    .map(|day| weekday_name(*day).to_string())
                    .collect();
                let facets = facets_by(
                    data.table,
                    COL_TEMP,
                    COL_COUNT,
                    COL_WEEKDAY,
                    |code| {
                        code.as_f64()
                            .and_then(|c| weekday_from_code(c as i64))
                            .map(|day| weekday_name(day).to_string())
                    },
                    &order,
                )?;
                FacetScatter {
                    title: "Temperature vs Bike Rental",
                    x_title: "Temperature",
                    y_title: "Number of bikes",
                    columns: 3,
                    opacity: 0.2,
                    facets,
                }
                .render(&path)?
            }
            ChartKind::TemperatureByWorkingDay => {
                let facets = labelled_facets(data.labelled, COL_TEMP, COL_WORKINGDAY)?;
                FacetScatter {
                    title: "Temp vs Bike Rental",
                    x_title: "Temperature",
                    y_title: "Number of bikes",
                    columns: 3,
                    opacity: 0.3,
                    facets,
                }
                .render(&path)?
            }
            ChartKind::HourHeatmap => {
                hour_heatmap::render(&hour_heatmap::hour_cells(data.by_hour)?, &path)?
            }
            ChartKind::HumidityByWeather => {
                let facets = labelled_facets(data.labelled, COL_HUMIDITY, COL_WEATHER)?;
                FacetScatter {
                    title: "Humidity vs Bike Rental",
                    x_title: "Humidity",
                    y_title: "Number of bikes",
                    columns: 2,
                    opacity: 0.5,
                    facets,
                }
                .render(&path)?
            }
            ChartKind::WeatherStrip => {
                strip::render(&weather_strips(data.labelled)?, "Number of bikes", &path)?
            }
            ChartKind::Correlation => correlation_heatmap::render(data.correlation, &path)?,
        }

        Ok(path)
    }
}

/// Facets keyed by a label column, in ascending label order.
fn labelled_facets(labelled: &Table, x: &str, facet_column: &str) -> Result<Vec<scatter::Facet>> {
    let order = sorted_labels(labelled, facet_column)?;
    facets_by(
        labelled,
        x,
        COL_COUNT,
        facet_column,
        |value| Some(value.to_string()),
        &order,
    )
}

fn sorted_labels(table: &Table, column: &str) -> Result<Vec<String>> {
    Ok(table
        .column(column)?
        .sorted_unique()
        .iter()
        .map(Scalar::to_string)
        .collect())
}

/// Rental counts per weather label with seeded jitter, so reruns draw the same picture.
pub fn weather_strips(labelled: &Table) -> Result<Vec<Strip>> {
    let labels = labelled.column(COL_WEATHER)?.labels();
    let counts = labelled.column(COL_COUNT)?.to_f64()?;
    let mut rng = StdRng::seed_from_u64(JITTER_SEED);

    sorted_labels(labelled, COL_WEATHER)?
        .into_iter()
        .map(|label| {
            let values: Vec<f64> = labels
                .iter()
                .zip(&counts)
                .filter(|(l, _)| l.as_deref() == Some(label.as_str()))
                .filter_map(|(_, c)| *c)
                .collect();
            Ok(Strip::jittered(label, &values, &mut rng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ColumnData};

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ChartKind::ALL.len());
        assert!(names.iter().all(|n| n.ends_with(".png")));
    }

    #[test]
    fn test_weather_strips_group_counts_by_label() -> Result<()> {
        let labelled = Table::new(vec![
            Column::new(
                "weathersit",
                ColumnData::Text(vec![
                    Some("2 (misty day)".into()),
                    Some("1 (mainly sunny)".into()),
                    Some("2 (misty day)".into()),
                ]),
            ),
            Column::new("cnt", ColumnData::Int(vec![Some(5), Some(7), Some(9)])),
        ])?;

        let strips = weather_strips(&labelled)?;
        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0].label, "1 (mainly sunny)");
        assert_eq!(strips[0].points.len(), 1);
        assert_eq!(strips[1].points.iter().map(|p| p.1).collect::<Vec<_>>(), vec![5.0, 9.0]);

        assert_eq!(weather_strips(&labelled)?, strips);
        Ok(())
    }
}
