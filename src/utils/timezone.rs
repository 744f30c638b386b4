use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Interpret a wall-clock time in this zone. Times skipped by a DST
    /// transition have no instant and yield `None`.
    pub(crate) fn from_local(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Timezone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Timezone::Named(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// IANA name of the zone, e.g. "Europe/Berlin"
    pub(crate) fn name(self) -> String {
        match self {
            Timezone::Named(tz) => tz.name().to_string(),
            Timezone::Local => local_zone_name().unwrap_or_else(|| "Local".to_string()),
        }
    }
}

/// Best-effort lookup of the host zone: `$TZ`, then the `/etc/localtime` link target.
fn local_zone_name() -> Option<String> {
    if let Ok(tz) = std::env::var("TZ") {
        let tz = tz.trim_start_matches(':');
        if Tz::from_str(tz).is_ok() {
            return Some(tz.to_string());
        }
    }
    let target = std::fs::read_link("/etc/localtime").ok()?;
    let target = target.to_string_lossy();
    let (_, name) = target.split_once("zoneinfo/")?;
    Tz::from_str(name).ok().map(|_| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("  local  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn named_zone_reports_iana_name() {
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert_eq!(tz.name(), "Asia/Shanghai");
    }

    #[test]
    fn local_zone_name_is_never_empty() {
        assert!(!Timezone::Local.name().is_empty());
    }

    #[test]
    fn from_local_applies_zone_offset() {
        let naive = chrono::NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let tz = Timezone::parse(Some("Asia/Tokyo")).unwrap();
        let utc = tz.from_local(naive).unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-01-15T03:00:00+00:00");
    }

    #[test]
    fn from_local_rejects_dst_gap() {
        // 02:30 does not exist in New York on 2026-03-08
        let naive = chrono::NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(tz.from_local(naive).is_none());
    }

    #[test]
    fn to_fixed_offset_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let fixed = tz.to_fixed_offset(utc);
        // EDT is UTC-4 in June
        assert_eq!(fixed.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(fixed.format("%H:%M").to_string(), "08:00");
    }
}
