//! Relative time strings ("5 минут назад") for post and message timestamps.
//!
//! Unit names stay in the single form the forum templates always used
//! (`2 минут назад`, `1 дней назад`); no plural agreement is attempted.

#[cfg(test)]
#[path = "time_ago_test.rs"]
mod time_ago_test;

use crate::consts::{
    AGO_SUFFIX, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_YEAR,
};

/// Units checked largest first. A unit wins once elapsed time strictly
/// exceeds one whole unit.
const UNITS: [(i64, &str); 5] = [
    (SECONDS_PER_YEAR, "лет"),
    (SECONDS_PER_MONTH, "месяцев"),
    (SECONDS_PER_DAY, "дней"),
    (SECONDS_PER_HOUR, "часов"),
    (SECONDS_PER_MINUTE, "минут"),
];

const SECONDS_LABEL: &str = "секунд";

/// Whole seconds between two epoch-millisecond instants, floored.
///
/// Instants in the future clamp to zero.
#[allow(clippy::cast_possible_truncation)]
pub fn elapsed_seconds(now_ms: f64, then_ms: f64) -> i64 {
    let seconds = ((now_ms - then_ms) / 1000.0).floor();
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast.
    seconds as i64
}

/// Format an elapsed duration using the largest unit that fits.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    for (unit, label) in UNITS {
        if seconds > unit {
            return format!("{} {label} {AGO_SUFFIX}", seconds / unit);
        }
    }
    format!("{seconds} {SECONDS_LABEL} {AGO_SUFFIX}")
}

/// Relative time between `then_ms` and `now_ms`, both epoch milliseconds.
pub fn time_ago(now_ms: f64, then_ms: f64) -> String {
    format_elapsed(elapsed_seconds(now_ms, then_ms))
}
