use crate::models::Scalar;

/// Format a float like Python's `repr`: shortest round-trip digits, integral values
/// keep a trailing `.0`, and decimal exponents below -4 or from 16 up switch to
/// scientific notation with a signed, two-digit exponent (`5e-05`, `1e+20`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render values as a bracketed list, quoting text: `[1, 2]`, `['a', 'b']`.
pub fn format_list(values: &[Scalar]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| match v {
            Scalar::Text(s) => format!("'{}'", s),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

pub fn format_names(names: &[&str]) -> String {
    let items: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", items.join(", "))
}

/// Value for a CSV cell: undefined statistics become empty cells.
pub fn format_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format_float(value)
    }
}
