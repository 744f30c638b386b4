use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clock::{Clock, Preset};
use super::convert::{date_text_to_epoch_seconds, epoch_text_to_date};
use super::format::{DerivedFields, TimezoneMode, format_for_display};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FieldState {
    Empty,
    Valid,
    Invalid,
}

impl FieldState {
    fn of(text: &str, valid: bool) -> Self {
        if text.trim().is_empty() {
            FieldState::Empty
        } else if valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }
}

/// The epoch / date field pair of the converter.
///
/// Editing one field rewrites the other only when the edited text parses;
/// otherwise the other field keeps whatever it showed before.
#[derive(Debug, Clone)]
pub(crate) struct TimestampState {
    epoch_text: String,
    date_text: String,
    zone: Timezone,
    utc: bool,
}

impl TimestampState {
    pub(crate) fn new(zone: Timezone, utc: bool) -> Self {
        TimestampState {
            epoch_text: String::new(),
            date_text: String::new(),
            zone,
            utc,
        }
    }

    pub(crate) fn epoch_text(&self) -> &str {
        &self.epoch_text
    }

    pub(crate) fn date_text(&self) -> &str {
        &self.date_text
    }

    pub(crate) fn mode(&self) -> TimezoneMode {
        if self.utc {
            TimezoneMode::Utc
        } else {
            TimezoneMode::Local(self.zone)
        }
    }

    pub(crate) fn zone(&self) -> Timezone {
        self.zone
    }

    pub(crate) fn set_epoch_text(&mut self, value: &str) {
        self.epoch_text = value.to_string();
        if let Some(date) = epoch_text_to_date(value) {
            self.date_text = format_for_display(date, self.mode());
        }
    }

    pub(crate) fn set_date_text(&mut self, value: &str) {
        self.date_text = value.to_string();
        if let Some(secs) = date_text_to_epoch_seconds(value, self.zone) {
            self.epoch_text = secs.to_string();
        }
    }

    /// Switch between UTC and local rendering; a valid epoch re-renders the date field
    pub(crate) fn set_utc(&mut self, utc: bool) {
        self.utc = utc;
        if let Some(date) = self.date() {
            self.date_text = format_for_display(date, self.mode());
        }
    }

    pub(crate) fn set_now(&mut self, clock: &dyn Clock) {
        self.set_epoch_text(&clock.now_seconds().to_string());
    }

    pub(crate) fn apply_preset(&mut self, clock: &dyn Clock, preset: Preset) {
        self.set_epoch_text(&preset.apply(clock).to_string());
    }

    pub(crate) fn date(&self) -> Option<DateTime<Utc>> {
        epoch_text_to_date(&self.epoch_text)
    }

    pub(crate) fn epoch_state(&self) -> FieldState {
        FieldState::of(&self.epoch_text, self.date().is_some())
    }

    pub(crate) fn date_state(&self) -> FieldState {
        let valid = date_text_to_epoch_seconds(&self.date_text, self.zone).is_some();
        FieldState::of(&self.date_text, valid)
    }

    pub(crate) fn details(&self) -> Option<DerivedFields> {
        self.date()
            .map(|date| DerivedFields::from_date(date, self.zone))
    }
}
