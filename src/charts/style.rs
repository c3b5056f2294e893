use plotters::prelude::{FontDesc, IntoFont, SegmentValue};

use crate::utils::constants::{FONT_FAMILY, SCALE_FACTOR};

/// Logical pixels to output pixels.
pub const fn px(size: u32) -> u32 {
    size * SCALE_FACTOR
}

pub fn font(size: u32) -> FontDesc<'static> {
    (FONT_FAMILY, px(size)).into_font()
}

/// Round up to 1, 2 or 5 times a power of ten, so axes end on a readable tick.
pub fn nice_upper(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(max.log10().floor());
    let scaled = max / magnitude;
    let step = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Index of a segmented-axis tick, `None` for the trailing edge.
pub fn segment_index(value: &SegmentValue<i32>) -> Option<usize> {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => usize::try_from(*i).ok(),
        SegmentValue::Last => None,
    }
}

pub fn ceil_div(n: usize, d: usize) -> usize {
    (n + d - 1) / d
}
