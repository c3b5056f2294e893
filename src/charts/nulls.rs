use plotters::prelude::*;
use std::path::Path;

use super::palette::viridis;
use super::style::{font, segment_index};
use crate::error::Result;
use crate::models::Table;

/// Figure size in output pixels; this chart is not rescaled.
const SIZE: (u32, u32) = (600, 500);

/// Contiguous run of missing cells in one column, as `[start, end)` row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullRun {
    pub column: usize,
    pub start: usize,
    pub end: usize,
}

pub fn null_runs(table: &Table) -> Vec<NullRun> {
    let mut runs = Vec::new();
    for (column, col) in table.columns().iter().enumerate() {
        let mask = col.null_mask();
        let mut row = 0;
        while row < mask.len() {
            if mask[row] {
                let start = row;
                while row < mask.len() && mask[row] {
                    row += 1;
                }
                runs.push(NullRun {
                    column,
                    start,
                    end: row,
                });
            } else {
                row += 1;
            }
        }
    }
    runs
}

/// Presence map of every cell: rows are observations, columns are fields.
pub fn render(table: &Table, path: &Path) -> Result<()> {
    let names = table.column_names();
    let n_cols = names.len().max(1) as i32;
    let n_rows = table.n_rows().max(1) as i32;
    let present = viridis(0.0, 0.0, 1.0);
    let missing = viridis(1.0, 0.0, 1.0);

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(90)
        .y_label_area_size(50)
        .build_cartesian_2d((0..n_cols - 1).into_segmented(), 0..n_rows)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(names.len())
        .y_labels(10)
        .x_label_style(font(5).transform(FontTransform::Rotate90))
        .y_label_style(font(5))
        .x_label_formatter(&|v| {
            segment_index(v)
                .and_then(|i| names.get(i))
                .map(|n| n.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| (n_rows - *y).to_string())
        .draw()?;

    // Row 0 sits at the top of the plot.
    chart.draw_series((0..n_cols).map(|c| {
        Rectangle::new(
            [
                (SegmentValue::Exact(c), n_rows),
                (SegmentValue::Exact(c + 1), 0),
            ],
            present.filled(),
        )
    }))?;

    chart.draw_series(null_runs(table).into_iter().map(|run| {
        let c = run.column as i32;
        Rectangle::new(
            [
                (SegmentValue::Exact(c), n_rows - run.start as i32),
                (SegmentValue::Exact(c + 1), n_rows - run.end as i32),
            ],
            missing.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
