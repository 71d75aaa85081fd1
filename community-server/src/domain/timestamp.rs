//! Stored timestamp parsing and human-relative rendering.
//!
//! Timestamps come back from the store as text, either RFC 3339
//! (`2024-12-17T19:00:11+07:00`, `2024-12-17T12:00:11Z`) or the PostgreSQL
//! text form (`2024-12-17 12:00:11.123456+00`). Both resolve to a UTC instant.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Beyond this distance from "now" the absolute date is shown instead.
const RELATIVE_CUTOFF_SECS: i64 = 73 * 60 * 60;

const LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TimestampError {
    #[error("unrecognized timestamp layout: '{0}'")]
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedTimestamp {
    pub(crate) instant: DateTime<Utc>,
    pub(crate) relative: String,
}

pub(crate) fn normalize(
    stored: &str,
    now: DateTime<Utc>,
) -> Result<NormalizedTimestamp, TimestampError> {
    let instant = parse_stored(stored)?;
    Ok(NormalizedTimestamp {
        instant,
        relative: relative_to(instant, now),
    })
}

pub(crate) fn parse_stored(stored: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = stored.trim();
    let candidate = match trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
    {
        Some(head) => format!("{head}+00:00"),
        None => trimmed.to_string(),
    };

    LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&candidate, layout).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok_or_else(|| TimestampError::Unrecognized(stored.to_string()))
}

/// Renders `instant` relative to `now`: "3 hours ago", "in 5 minutes",
/// or `YYYY-MM-DD` once the distance reaches 73 hours.
pub(crate) fn relative_to(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(instant);
    if delta.num_seconds().abs() >= RELATIVE_CUTOFF_SECS {
        return instant.format("%Y-%m-%d").to_string();
    }

    let text = describe(delta.abs());
    if delta >= Duration::zero() {
        format!("{text} ago")
    } else {
        format!("in {text}")
    }
}

struct Period {
    millis: i64,
    one: &'static str,
    unit: &'static str,
}

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

const PERIODS: [Period; 6] = [
    Period { millis: SECOND_MS, one: "about a second", unit: "seconds" },
    Period { millis: MINUTE_MS, one: "about a minute", unit: "minutes" },
    Period { millis: HOUR_MS, one: "about an hour", unit: "hours" },
    Period { millis: DAY_MS, one: "one day", unit: "days" },
    Period { millis: 30 * DAY_MS, one: "one month", unit: "months" },
    Period { millis: 365 * DAY_MS, one: "one year", unit: "years" },
];

fn rounded(millis: i64, step: i64) -> i64 {
    (millis as f64 / step as f64 + 0.5).floor() as i64
}

/// Picks the largest period that fits, rounding to the nearest unit. A value
/// that rounds up to a whole next period is promoted to that period.
fn describe(distance: Duration) -> String {
    let millis = distance.num_milliseconds();
    if millis < PERIODS[0].millis {
        return PERIODS[0].one.to_string();
    }

    for (idx, period) in PERIODS.iter().enumerate() {
        let next = PERIODS.get(idx + 1).map(|p| p.millis);
        let fits = match next {
            Some(next) => millis < next,
            None => true,
        };
        if !fits {
            continue;
        }

        let count = rounded(millis, period.millis);
        if let Some(next) = next
            && count == rounded(next, period.millis)
        {
            continue;
        }

        return if count == 1 {
            period.one.to_string()
        } else {
            format!("{count} {}", period.unit)
        };
    }

    PERIODS[0].one.to_string()
}
