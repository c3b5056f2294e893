use plotters::prelude::*;
use std::path::Path;

use super::palette;
use super::style::{ceil_div, font, nice_upper, px};
use crate::error::Result;
use crate::models::{Scalar, Table};

/// Logical size of one facet's plotting area.
const PANEL_WIDTH: u32 = 200;
const PANEL_HEIGHT: u32 = 150;
/// Room around each panel for its caption, tick labels and axis titles.
const PANEL_PAD_X: u32 = 80;
const PANEL_PAD_Y: u32 = 90;
const TITLE_HEIGHT: u32 = 40;

/// Points belonging to one facet value.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Split the (x, y) pairs of a table into facets by the labels of another column.
/// Facets follow `order`; labels missing from the data produce no panel, rows whose
/// label is not in `order` are dropped.
pub fn facets_by<F>(
    table: &Table,
    x: &str,
    y: &str,
    facet_column: &str,
    label: F,
    order: &[String],
) -> Result<Vec<Facet>>
where
    F: Fn(&Scalar) -> Option<String>,
{
    let xs = table.column(x)?.to_f64()?;
    let ys = table.column(y)?.to_f64()?;
    let keys = table.column(facet_column)?;

    let mut facets: Vec<Facet> = order
        .iter()
        .map(|l| Facet {
            label: l.clone(),
            points: Vec::new(),
        })
        .collect();

    for row in 0..table.n_rows() {
        let (Some(xv), Some(yv)) = (xs[row], ys[row]) else {
            continue;
        };
        let Some(key) = keys.get(row).and_then(|k| label(&k)) else {
            continue;
        };
        if let Some(facet) = facets.iter_mut().find(|f| f.label == key) {
            facet.points.push((xv, yv));
        }
    }

    facets.retain(|f| !f.points.is_empty());
    Ok(facets)
}

/// Small-multiple scatter plot, one panel per facet, sharing both axes.
pub struct FacetScatter<'a> {
    pub title: &'a str,
    pub x_title: &'a str,
    pub y_title: &'a str,
    pub columns: usize,
    pub opacity: f64,
    pub facets: Vec<Facet>,
}

impl FacetScatter<'_> {
    fn grid(&self) -> (usize, usize) {
        let n = self.facets.len().max(1);
        let cols = self.columns.clamp(1, n);
        (ceil_div(n, cols), cols)
    }

    fn shared_ranges(&self) -> (f64, f64) {
        let (x_max, y_max) = self
            .facets
            .iter()
            .flat_map(|f| f.points.iter())
            .fold((0.0f64, 0.0f64), |(mx, my), &(x, y)| (mx.max(x), my.max(y)));
        (nice_upper(x_max), nice_upper(y_max))
    }

    pub fn render(&self, path: &Path) -> Result<()> {
        let (rows, cols) = self.grid();
        let width = px(PANEL_WIDTH + PANEL_PAD_X) * cols as u32;
        let height = px(PANEL_HEIGHT + PANEL_PAD_Y) * rows as u32 + px(TITLE_HEIGHT);
        let (x_max, y_max) = self.shared_ranges();

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let body = root.titled(self.title, font(17))?;

        for (i, (facet, area)) in self
            .facets
            .iter()
            .zip(body.split_evenly((rows, cols)))
            .enumerate()
        {
            let style = palette::category(i).mix(self.opacity).filled();

            let mut chart = ChartBuilder::on(&area)
                .caption(&facet.label, font(13))
                .margin(px(6))
                .x_label_area_size(px(36))
                .y_label_area_size(px(48))
                .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

            chart
                .configure_mesh()
                .x_desc(self.x_title)
                .y_desc(self.y_title)
                .x_labels(5)
                .y_labels(5)
                .label_style(font(12))
                .axis_desc_style(font(15))
                .draw()?;

            chart.draw_series(
                facet
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), px(1), style)),
            )?;
        }

        root.present()?;
        Ok(())
    }
}
