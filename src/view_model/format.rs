//! Display formatting shared by the view model

use crate::consts::dashboard_consts::MISSING_PRICE;
use crate::models::timestamp::parse_timestamp;
use chrono::TimeZone;
use std::fmt::Display;

/// `"1 signal"`, `"2 signals"`, `"0 signals"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Formats a price to 5 decimals. Missing, zero and non-finite prices
/// render as the placeholder.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => format!("{:.5}", v),
        _ => MISSING_PRICE.to_string(),
    }
}

/// Formats a counter with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders a backend timestamp as `Nov 06, 2025 12:30:00` in `tz`,
/// or returns the raw string if it does not parse.
pub fn format_signal_time<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(ts) => ts
            .with_timezone(tz)
            .format("%b %d, %Y %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}
