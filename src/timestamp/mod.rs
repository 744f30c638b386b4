//! Timestamp converter
//!
//! Converts between Unix epoch values (seconds or milliseconds) and
//! human-readable dates, with calendar details, "now" and quick presets.

mod clock;
mod convert;
mod format;
mod parse;
mod state;

pub(crate) use clock::{CurrentTime, Preset, RefreshTimer, SystemClock};
#[cfg(test)]
pub(crate) use clock::FixedClock;
pub(crate) use convert::is_epoch_text;
pub(crate) use format::{DerivedFields, TimezoneMode};
pub(crate) use state::{FieldState, TimestampState};
