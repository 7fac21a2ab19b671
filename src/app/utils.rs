use std::fmt::Display;

use chrono::{DateTime, Days, Local, NaiveDate, Utc};

pub const NOT_AVAILABLE: &str = "N/A";

pub fn fmt_or_na<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn fmt_price(value: Option<f64>) -> String {
    fmt_or_na(value.map(|v| format!("{:.2}", v)))
}

/// Fractional yield as a percentage, `0.0072` -> `0.72%`.
pub fn fmt_percent_fraction(value: Option<f64>) -> String {
    fmt_or_na(value.map(|v| format!("{:.2}%", v * 100.0)))
}

pub fn fmt_large_number(prefix: &str, value: Option<f64>) -> String {
    fmt_or_na(value.map(|v| format!("{}{}", prefix, group_thousands(v.round() as i64))))
}

pub fn fmt_count(value: Option<u64>) -> String {
    fmt_or_na(value.map(|v| group_thousands(v as i64)))
}

pub fn fmt_text(value: Option<&str>) -> String {
    fmt_or_na(value)
}

pub fn fmt_timestamp(value: Option<&DateTime<Utc>>) -> String {
    fmt_or_na(value.map(|ts| {
        ts.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }))
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}
