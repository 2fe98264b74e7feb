//! Number and date formatting shared by the page controllers.

use chrono::{DateTime, NaiveDateTime, Utc};

pub fn fmt2(x: f64) -> String {
    format!("{:.2}", x)
}

/// `1234567.891` -> `"1,234,567.89"`. Sign is dropped; callers pick the prefix.
pub fn money(x: f64) -> String {
    let fixed = format!("{:.2}", x.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{frac}")
}

pub fn sign(x: f64) -> &'static str {
    if x >= 0.0 { "+" } else { "-" }
}

/// Absolute percent with two decimals, or `n/a` when undefined.
pub fn percent(x: Option<f64>) -> String {
    match x {
        Some(v) if v.is_finite() => format!("{:.2}%", v.abs()),
        _ => "n/a".to_string(),
    }
}

pub fn date_time(dt: NaiveDateTime) -> String {
    dt.format("%b %d, %Y %H:%M").to_string()
}

pub fn date(dt: NaiveDateTime) -> String {
    dt.format("%b %d, %Y").to_string()
}

pub fn clock(dt: DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}
