use std::fmt::Display;

use chrono::{DateTime, TimeDelta, TimeZone};

use crate::core::{DAY, HOUR, MINUTE};
use crate::error::{SliderError, SliderResult};

const SECONDS_AGO_PATTERN: &str = "%-I:%M%P - %b %-d, %Y";

/// Short axis label for a seconds-ago stop: `now`, `-30s`, `-10m`, `-4h`, `-7d`.
#[must_use]
pub fn format_tick_label(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "nan".to_owned();
    }
    if seconds == 0.0 {
        return "now".to_owned();
    }

    let (amount, unit) = if seconds < MINUTE as f64 {
        (seconds, "s")
    } else if seconds < HOUR as f64 {
        (seconds / MINUTE as f64, "m")
    } else if seconds < DAY as f64 {
        (seconds / HOUR as f64, "h")
    } else {
        (seconds / DAY as f64, "d")
    };
    let amount = (amount * 100.0).round() / 100.0;
    format!("-{amount}{unit}")
}

/// Wall-clock instant `seconds` before `now`, at millisecond precision.
///
/// The result keeps the time zone of `now`.
pub fn seconds_ago_to_datetime<Tz: TimeZone>(
    seconds: f64,
    now: DateTime<Tz>,
) -> SliderResult<DateTime<Tz>> {
    if !seconds.is_finite() {
        return Err(SliderError::InvalidData(
            "seconds-ago must be finite".to_owned(),
        ));
    }

    TimeDelta::try_milliseconds((seconds * 1_000.0).round() as i64)
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or_else(|| {
            SliderError::InvalidData(format!("{seconds} seconds ago is out of datetime range"))
        })
}

/// Tooltip text for a handle: `now`, or e.g. `3:04pm - Oct 19, 2026`.
///
/// The clock is rendered in the zone of `now`; pass `Local::now()` for the
/// viewer's local time or `Utc::now()` for UTC.
pub fn format_seconds_ago<Tz>(seconds: f64, now: DateTime<Tz>) -> SliderResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if seconds == 0.0 {
        return Ok("now".to_owned());
    }
    let instant = seconds_ago_to_datetime(seconds, now)?;
    Ok(instant.format(SECONDS_AGO_PATTERN).to_string())
}
