use chrono::{DateTime, Utc};
use tracing::debug;

use super::parse::parse_date_text;
use crate::consts::MAX_EPOCH_MILLIS;
use crate::utils::Timezone;

/// Epoch values with more digits than this are read as milliseconds
const SECONDS_MAX_DIGITS: usize = 10;

/// Interpret epoch text as a date.
///
/// Up to ten digits (sign excluded) is seconds, anything longer is
/// milliseconds. Returns `None` for non-integers and out-of-range values.
pub(crate) fn epoch_text_to_date(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    let digits = integer_digits(trimmed)?;
    let value: i64 = trimmed.parse().ok()?;
    let millis = if digits.len() <= SECONDS_MAX_DIGITS {
        value.checked_mul(1000)?
    } else {
        value
    };
    date_from_millis(millis)
}

/// Digits of an optionally signed integer, or `None` if `text` is not one
fn integer_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Whether `text` has the shape of an epoch value, in range or not
pub(crate) fn is_epoch_text(text: &str) -> bool {
    integer_digits(text.trim()).is_some()
}

fn date_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    if !(-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&millis) {
        debug!(millis, "epoch value outside the calendar range");
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// Parse date text and return whole epoch seconds, rounding toward the past.
pub(crate) fn date_text_to_epoch_seconds(text: &str, zone: Timezone) -> Option<i64> {
    parse_date_text(text, zone).map(|date| date.timestamp_millis().div_euclid(1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::format::{TimezoneMode, format_for_display};

    #[test]
    fn seconds_and_millis_resolve_to_same_instant() {
        let secs = epoch_text_to_date("1699900800").unwrap();
        let millis = epoch_text_to_date("1699900800000").unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn epoch_zero_is_unix_epoch() {
        let date = epoch_text_to_date("0").unwrap();
        assert_eq!(
            format_for_display(date, TimezoneMode::Utc),
            "1970-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn sign_is_not_counted_toward_unit() {
        let date = epoch_text_to_date("-1000000000").unwrap();
        assert_eq!(date.timestamp(), -1_000_000_000);
        let date = epoch_text_to_date("+86400").unwrap();
        assert_eq!(date.timestamp(), 86_400);
    }

    #[test]
    fn eleven_digits_are_milliseconds() {
        let date = epoch_text_to_date("10000000000").unwrap();
        assert_eq!(date.timestamp(), 10_000_000);
    }

    #[test]
    fn rejects_non_integers() {
        for text in ["", "  ", "abc", "12.5", "1e9", "12abc", "-", "0x10", "1 2"] {
            assert!(epoch_text_to_date(text).is_none(), "{text:?}");
        }
    }

    #[test]
    fn epoch_shape_detection() {
        assert!(is_epoch_text(" 1699900800 "));
        assert!(is_epoch_text("-5"));
        assert!(is_epoch_text("99999999999999999999"));
        assert!(!is_epoch_text("2024-01-15"));
        assert!(!is_epoch_text(""));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(epoch_text_to_date("8640000000000001").is_none());
        assert!(epoch_text_to_date("-8640000000000001").is_none());
        assert!(epoch_text_to_date("99999999999999999999").is_none());
        assert!(epoch_text_to_date("253402300799000").is_some());
    }

    #[test]
    fn date_text_floors_to_seconds() {
        let utc = Timezone::Named(chrono_tz::UTC);
        assert_eq!(
            date_text_to_epoch_seconds("1970-01-01T00:00:01.999Z", utc),
            Some(1)
        );
        assert_eq!(
            date_text_to_epoch_seconds("1969-12-31T23:59:59.500Z", utc),
            Some(-1)
        );
        assert_eq!(date_text_to_epoch_seconds("garbage", utc), None);
    }

    #[test]
    fn iso_utc_round_trips() {
        let utc = Timezone::Named(chrono_tz::UTC);
        for iso in [
            "2024-01-15T12:00:00.000Z",
            "1970-01-01T00:00:00.000Z",
            "1969-07-20T20:17:40.000Z",
            "2038-01-19T03:14:08.000Z",
        ] {
            let secs = date_text_to_epoch_seconds(iso, utc).unwrap();
            let date = epoch_text_to_date(&secs.to_string()).unwrap();
            assert_eq!(format_for_display(date, TimezoneMode::Utc), iso);
        }
    }
}
