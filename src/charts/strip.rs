use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rand::Rng;
use std::f64::consts::PI;
use std::path::Path;

use super::palette;
use super::style::{font, nice_upper, px};
use crate::error::Result;

const COLUMN_WIDTH: u32 = 150;
const PLOT_HEIGHT: u32 = 300;
const HEADER_HEIGHT: u32 = 150;
const Y_AXIS_WIDTH: u32 = 70;
const OPACITY: f64 = 0.6;
const MIN_JITTER_EXTENT: f64 = 3.0;

/// Standard normal draw from two independent uniforms (Box-Muller).
/// The first uniform is taken from (0, 1] so the logarithm stays finite.
pub fn gaussian_jitter<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// One strip: a category label and its (jitter, value) points.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Strip {
    pub fn jittered<R: Rng>(label: String, values: &[f64], rng: &mut R) -> Self {
        let points = values.iter().map(|&v| (gaussian_jitter(rng), v)).collect();
        Self { label, points }
    }
}

/// Jittered strip plot, one column per category, x axis hidden.
pub fn render(strips: &[Strip], y_title: &str, path: &Path) -> Result<()> {
    let n = strips.len().max(1);
    let width = px(Y_AXIS_WIDTH + COLUMN_WIDTH * n as u32);
    let height = px(PLOT_HEIGHT + HEADER_HEIGHT);

    let y_max = nice_upper(
        strips
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .fold(0.0, f64::max),
    );
    let x_extent = strips
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.0.abs()))
        .fold(MIN_JITTER_EXTENT, f64::max);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    // The first column also carries the shared y axis.
    let breaks: Vec<i32> = (1..n)
        .map(|i| px(Y_AXIS_WIDTH + COLUMN_WIDTH * i as u32) as i32)
        .collect();
    let columns = root.split_by_breakpoints(breaks, Vec::<i32>::new());

    for (i, (strip, area)) in strips.iter().zip(columns.iter()).enumerate() {
        let first = i == 0;
        let (plot, header) = area.split_vertically(px(PLOT_HEIGHT));
        let style = palette::category(i).mix(OPACITY).filled();

        let mut chart = ChartBuilder::on(&plot)
            .margin_top(px(10))
            .x_label_area_size(0)
            .y_label_area_size(if first { px(Y_AXIS_WIDTH) } else { 0 })
            .build_cartesian_2d(-x_extent..x_extent, 0.0..y_max)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .disable_x_axis()
                .x_labels(0)
                .label_style(font(10))
                .axis_desc_style(font(12));
            if first {
                mesh.y_desc(y_title);
            } else {
                mesh.disable_y_axis().y_labels(0);
            }
            mesh.draw()?;
        }

        chart.draw_series(
            strip
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), px(1), style)),
        )?;

        let (header_width, _) = header.dim_in_pixel();
        let offset = if first { px(Y_AXIS_WIDTH) } else { 0 };
        let center = (offset + header_width.saturating_sub(offset) / 2) as i32;
        header.draw(&Text::new(
            strip.label.clone(),
            (center, px(6) as i32),
            font(11)
                .transform(FontTransform::Rotate270)
                .color(&BLACK)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
    }

    root.present()?;
    Ok(())
}
