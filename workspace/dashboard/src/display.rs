//! Text formatting for summary cards and prediction results.

/// Shown in place of a value the API did not report.
pub const MISSING: &str = "—";

/// Groups the integer part in thousands and keeps up to three decimals,
/// e.g. `1234567.5` → `1,234,567.5`.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

pub fn format_optional_count(value: Option<f64>) -> String {
    value.map(format_count).unwrap_or_else(|| MISSING.to_string())
}

/// One decimal and a percent sign, e.g. `93.456` → `93.5%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1}%", v),
        _ => MISSING.to_string(),
    }
}

/// Growth as reported, prefixed with `+`, e.g. `12.5` → `+12.5%`.
pub fn format_growth(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("+{}%", v),
        _ => MISSING.to_string(),
    }
}

/// Plain integer-looking value such as a year, e.g. `2024.0` → `2024`.
pub fn format_plain(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => MISSING.to_string(),
    }
}
