//! Lenient date/time parser for user-entered text
//!
//! Accepts the common shapes people paste into a converter. Text with an
//! explicit offset is absolute; a bare ISO date is UTC midnight; any other
//! wall-clock form is read in the configured zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::consts::MAX_EPOCH_MILLIS;
use crate::utils::Timezone;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const LOCAL_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y"];

pub(crate) fn parse_date_text(text: &str, zone: Timezone) -> Option<DateTime<Utc>> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    let parsed = parse_absolute(s)
        .or_else(|| parse_iso_date(s))
        .or_else(|| parse_wall_clock(s, zone))?;
    in_range(parsed)
}

fn parse_absolute(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let normalized = match s.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `YYYY-MM-DD` on its own is midnight UTC
fn parse_iso_date(s: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0).map(|n| n.and_utc())
}

fn parse_wall_clock(s: &str, zone: Timezone) -> Option<DateTime<Utc>> {
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return zone.from_local(naive);
        }
    }
    for fmt in LOCAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return zone.from_local(date.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

fn in_range(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
    (-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS)
        .contains(&dt.timestamp_millis())
        .then_some(dt)
}
