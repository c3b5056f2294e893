use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::RGBColor;

/// Categorical colours, in assignment order.
pub const TABLEAU10: [RGBColor; 10] = [
    RGBColor(0x4c, 0x78, 0xa8),
    RGBColor(0xf5, 0x85, 0x18),
    RGBColor(0xe4, 0x57, 0x56),
    RGBColor(0x72, 0xb7, 0xb2),
    RGBColor(0x54, 0xa2, 0x4b),
    RGBColor(0xee, 0xca, 0x3b),
    RGBColor(0xb2, 0x79, 0xa2),
    RGBColor(0xff, 0x9d, 0xa6),
    RGBColor(0x9d, 0x75, 0x5d),
    RGBColor(0xba, 0xb0, 0xac),
];

const BLUES_LOW: RGBColor = RGBColor(0xef, 0xf6, 0xfc);
const BLUES_HIGH: RGBColor = RGBColor(0x08, 0x30, 0x6b);

pub const MISSING_CELL: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);

pub fn category(index: usize) -> RGBColor {
    TABLEAU10[index % TABLEAU10.len()]
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !(max > min) || value.is_nan() {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

pub fn viridis(value: f64, min: f64, max: f64) -> RGBColor {
    let t = normalize(value, min, max);
    <ViridisRGB as ColorMap<RGBColor, f64>>::get_color_normalized(&ViridisRGB, t, 0.0, 1.0)
}

/// Sequential single-hue blue ramp.
pub fn blues(value: f64, min: f64, max: f64) -> RGBColor {
    let t = normalize(value, min, max);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(
        lerp(BLUES_LOW.0, BLUES_HIGH.0),
        lerp(BLUES_LOW.1, BLUES_HIGH.1),
        lerp(BLUES_LOW.2, BLUES_HIGH.2),
    )
}
