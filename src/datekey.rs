use chrono::{Local, NaiveDate};

/// Canonical key for a calendar day: zero-padded `YYYY-MM-DD`.
pub fn encode(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a canonical date key back into a calendar day.
///
/// Only accepts the exact canonical form: a key that parses but is not
/// zero-padded (`2024-3-5`) is rejected, so every accepted key is
/// byte-identical to what `encode` produces for that day.
pub fn decode(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    if encode(date) == key { Some(date) } else { None }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    encode(today())
}
