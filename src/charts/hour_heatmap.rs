use chrono::Weekday;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::trace;

use super::palette::blues;
use super::style::{font, nice_upper, px, segment_index};
use crate::error::Result;
use crate::models::bike::{weekday_from_code, weekday_name, WEEK_ORDER};
use crate::models::Table;
use crate::utils::constants::{COL_COUNT, COL_HOUR, COL_WEEKDAY};

const TITLE: &str = "Count of bike rental by Hour and Day in Washington, DC";
const HOURS: i32 = 24;
const DAYS: i32 = 7;
const CELL: u32 = 20;
const LEGEND_STEPS: usize = 64;

/// One heatmap cell; these are the fields a reader can look up per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub weekday: Weekday,
    pub hour: i32,
    pub count: f64,
}

/// Cells from the (weekday, hr) mean table. Rows with unknown weekday codes,
/// hours outside 0-23 or a missing mean are skipped.
pub fn hour_cells(by_hour: &Table) -> Result<Vec<HeatCell>> {
    let weekdays = by_hour.column(COL_WEEKDAY)?.to_f64()?;
    let hours = by_hour.column(COL_HOUR)?.to_f64()?;
    let counts = by_hour.column(COL_COUNT)?.to_f64()?;

    let cells = weekdays
        .into_iter()
        .zip(hours)
        .zip(counts)
        .filter_map(|((day, hour), count)| {
            let weekday = weekday_from_code(day? as i64)?;
            let hour = hour? as i32;
            (0..HOURS).contains(&hour).then_some(HeatCell {
                weekday,
                hour,
                count: count?,
            })
        })
        .collect();

    Ok(cells)
}

/// Row position of a weekday with Monday on top.
fn row_of(day: Weekday) -> i32 {
    DAYS - 1 - day.num_days_from_monday() as i32
}

pub fn render(cells: &[HeatCell], path: &Path) -> Result<()> {
    let max_count = nice_upper(cells.iter().map(|c| c.count).fold(0.0, f64::max));

    let plot_width = px(CELL * HOURS as u32 + 110);
    let legend_width = px(90);
    let height = px(CELL * DAYS as u32 + 110);

    let root = BitMapBackend::new(path, (plot_width + legend_width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let body = root.titled(TITLE, font(13))?;
    let (plot_area, legend_area) = body.split_horizontally(plot_width);

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(px(8))
        .x_label_area_size(px(40))
        .y_label_area_size(px(90))
        .build_cartesian_2d(
            (0..HOURS - 1).into_segmented(),
            (0..DAYS - 1).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(HOURS as usize)
        .y_labels(DAYS as usize)
        .x_desc("Hour of Day")
        .y_desc("Day of Week")
        .label_style(font(10))
        .axis_desc_style(font(11))
        .x_label_formatter(&|v| segment_index(v).map(|h| h.to_string()).unwrap_or_default())
        .y_label_formatter(&|v| {
            segment_index(v)
                .and_then(|row| WEEK_ORDER.get(DAYS as usize - 1 - row.min(DAYS as usize - 1)))
                .map(|day| weekday_name(*day).to_string())
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(cells.iter().map(|cell| {
        trace!(
            weekday = weekday_name(cell.weekday),
            hour = cell.hour,
            count = cell.count,
            "heatmap cell"
        );
        let row = row_of(cell.weekday);
        Rectangle::new(
            [
                (SegmentValue::Exact(cell.hour), SegmentValue::Exact(row)),
                (SegmentValue::Exact(cell.hour + 1), SegmentValue::Exact(row + 1)),
            ],
            blues(cell.count, 0.0, max_count).filled(),
        )
    }))?;

    draw_legend(&legend_area, max_count)?;

    root.present()?;
    Ok(())
}

/// Vertical colour bar from zero to `max_count`.
fn draw_legend(area: &DrawingArea<BitMapBackend<'_>, Shift>, max_count: f64) -> Result<()> {
    let mut legend = ChartBuilder::on(area)
        .caption("counts", font(10))
        .margin_top(px(10))
        .margin_bottom(px(50))
        .margin_right(px(40))
        .y_label_area_size(px(36))
        .build_cartesian_2d(0.0..1.0, 0.0..max_count)?;

    legend
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .x_labels(0)
        .y_labels(5)
        .label_style(font(9))
        .draw()?;

    let step = max_count / LEGEND_STEPS as f64;
    legend.draw_series((0..LEGEND_STEPS).map(|i| {
        let low = step * i as f64;
        Rectangle::new(
            [(0.0, low), (1.0, low + step)],
            blues(low + step / 2.0, 0.0, max_count).filled(),
        )
    }))?;

    Ok(())
}
