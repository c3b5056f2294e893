use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::palette::{viridis, MISSING_CELL};
use super::style::{font, px, segment_index};
use crate::analyzers::CorrelationMatrix;
use crate::error::Result;
use crate::utils::constants::CORRELATION_TEXT_THRESHOLD;

const TITLE: &str = "Correlation matrix";
const GRID_SIZE: u32 = 400;
const LABEL_AREA: u32 = 90;

/// Overlay text colour: dark on the bright end of the scale, light elsewhere.
pub fn text_color(correlation: f64) -> RGBColor {
    if correlation >= CORRELATION_TEXT_THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

pub fn cell_label(correlation: f64) -> String {
    if correlation.is_nan() {
        String::new()
    } else {
        format!("{:.2}", correlation)
    }
}

/// Colour grid of the matrix with each coefficient printed in its cell.
/// Var1 runs down the rows, Var2 across the columns.
pub fn render(matrix: &CorrelationMatrix, path: &Path) -> Result<()> {
    let names = matrix.names();
    let n = matrix.len().max(1) as i32;
    let (lo, hi) = matrix.extent();

    let size = px(GRID_SIZE + LABEL_AREA + 40);
    let root = BitMapBackend::new(path, (size, size + px(30))).into_drawing_area();
    root.fill(&WHITE)?;
    let body = root.titled(TITLE, font(13))?;

    let mut chart = ChartBuilder::on(&body)
        .margin(px(10))
        .x_label_area_size(px(LABEL_AREA))
        .y_label_area_size(px(LABEL_AREA))
        .build_cartesian_2d((0..n - 1).into_segmented(), (0..n - 1).into_segmented())?;

    // Row 0 of the matrix sits at the top.
    let var1_at = |v: &SegmentValue<i32>| {
        segment_index(v)
            .and_then(|y| (n as usize - 1).checked_sub(y))
            .and_then(|row| names.get(row))
            .cloned()
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n as usize)
        .y_labels(n as usize)
        .x_desc("Var2")
        .y_desc("Var1")
        .x_label_style(font(9).transform(FontTransform::Rotate90))
        .y_label_style(font(9))
        .axis_desc_style(font(10))
        .x_label_formatter(&|v| {
            segment_index(v)
                .and_then(|col| names.get(col))
                .cloned()
                .unwrap_or_default()
        })
        .y_label_formatter(&var1_at)
        .draw()?;

    let cells: Vec<(i32, i32, f64)> = (0..matrix.len())
        .flat_map(|row| (0..matrix.len()).map(move |col| (row, col)))
        .map(|(row, col)| (col as i32, n - 1 - row as i32, matrix.value(row, col)))
        .collect();

    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        let color = if r.is_nan() { MISSING_CELL } else { viridis(r, lo, hi) };
        Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            color.filled(),
        )
    }))?;

    chart.draw_series(cells.iter().map(|&(x, y, r)| {
        Text::new(
            cell_label(r),
            (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
            font(8)
                .color(&text_color(r))
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )
    }))?;

    root.present()?;
    Ok(())
}
