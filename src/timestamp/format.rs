use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::utils::Timezone;

/// How converted dates are rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TimezoneMode {
    Utc,
    Local(Timezone),
}

pub(crate) fn format_for_display(date: DateTime<Utc>, mode: TimezoneMode) -> String {
    match mode {
        TimezoneMode::Utc => format_iso_utc(date),
        TimezoneMode::Local(zone) => format_local(date, zone),
    }
}

/// ISO-8601 with millisecond precision, e.g. `2024-01-15T12:00:00.000Z`.
/// Years outside 0000..=9999 use the six-digit signed form.
pub(crate) fn format_iso_utc(date: DateTime<Utc>) -> String {
    let year = date.year();
    if (0..=9999).contains(&year) {
        date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    } else {
        format!("{year:+07}-{}", date.format("%m-%dT%H:%M:%S%.3fZ"))
    }
}

/// Locale-style wall-clock rendering, e.g. `1/15/2024, 12:00:00 PM`
pub(crate) fn format_local(date: DateTime<Utc>, zone: Timezone) -> String {
    zone.to_fixed_offset(date)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Calendar breakdown shown under a converted timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DerivedFields {
    pub(crate) year: i32,
    pub(crate) month: String,
    pub(crate) day: u32,
    pub(crate) weekday: String,
    pub(crate) hour: String,
    pub(crate) minute: String,
    pub(crate) second: String,
    pub(crate) timezone: String,
}

impl DerivedFields {
    pub(crate) fn from_date(date: DateTime<Utc>, zone: Timezone) -> Self {
        let local = zone.to_fixed_offset(date);
        DerivedFields {
            year: local.year(),
            month: local.format("%B").to_string(),
            day: local.day(),
            weekday: local.format("%A").to_string(),
            hour: local.format("%H").to_string(),
            minute: local.format("%M").to_string(),
            second: local.format("%S").to_string(),
            timezone: zone.name(),
        }
    }
}
