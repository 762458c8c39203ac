use chrono::{DateTime, Datelike, NaiveDate};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Convert epoch seconds (fractional, possibly negative) to a UTC calendar date.
///
/// Sub-second precision is rounded to the nearest microsecond before the date is taken.
/// Returns `None` for non-finite values and for instants outside years 1 through 9999.
pub fn utc_date_from_epoch_seconds(seconds: f64) -> Option<NaiveDate> {
    if !seconds.is_finite() {
        return None;
    }
    // Saturating cast: anything beyond i64 is also beyond chrono's range
    let micros = (seconds * 1_000_000.0).round() as i64;
    let date = DateTime::from_timestamp_micros(micros)?.date_naive();
    (MIN_YEAR..=MAX_YEAR).contains(&date.year()).then_some(date)
}
