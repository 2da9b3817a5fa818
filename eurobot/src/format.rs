//! Field formatting for country replies.
//!
//! Every function is total: missing, zero, negative or non-finite input still yields a string.

/// Shown for numeric fields without a value.
pub const NOT_SPECIFIED: &str = "Не указано";
/// Shown for a missing capital.
pub const CAPITAL_NOT_SPECIFIED: &str = "Не указана";
/// Shown for a missing list of neighbours.
pub const BORDERS_NOT_SPECIFIED: &str = "Не указаны";

/// Millions with one decimal, thousands with one decimal, or the raw count.
pub fn format_population(population: Option<i64>) -> String {
    match population {
        Some(n) if n >= 1_000_000 => format!("{:.1} млн чел.", n as f64 / 1_000_000.0),
        Some(n) if n >= 1_000 => format!("{:.1} тыс. чел.", n as f64 / 1_000.0),
        Some(n) if n != 0 => format!("{} чел.", n),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Rounded square kilometres, grouped by thousands with a space: `1 234 567 км²`.
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a != 0.0 && a.is_finite() => {
            format!("{} км²", group_thousands(a.round() as i64))
        }
        Some(a) if a != 0.0 => format!("{} км²", a),
        _ => NOT_SPECIFIED.to_string(),
    }
}

pub fn format_density(density: Option<f64>) -> String {
    match density {
        Some(d) if d != 0.0 => format!("{:.1} чел./км²", d),
        _ => NOT_SPECIFIED.to_string(),
    }
}

pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(p) if p != 0.0 => format!("{:.2}%", p),
        _ => NOT_SPECIFIED.to_string(),
    }
}

pub fn format_capital(capital: Option<&str>) -> String {
    text_or(capital, CAPITAL_NOT_SPECIFIED)
}

pub fn format_borders(borders: Option<&str>) -> String {
    text_or(borders, BORDERS_NOT_SPECIFIED)
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
