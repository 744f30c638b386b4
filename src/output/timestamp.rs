use comfy_table::Color;

use crate::output::format::{create_styled_table, header_cell, label_cell, styled_cell, to_json};
use crate::timestamp::{CurrentTime, DerivedFields, FieldState, TimestampState, TimezoneMode};

fn mode_name(mode: TimezoneMode) -> &'static str {
    match mode {
        TimezoneMode::Utc => "utc",
        TimezoneMode::Local(_) => "local",
    }
}

fn field_text(text: &str, state: FieldState) -> String {
    match state {
        FieldState::Valid => text.to_string(),
        FieldState::Empty => "-".to_string(),
        FieldState::Invalid => format!("{text} (invalid)"),
    }
}

pub(crate) fn print_conversion(state: &TimestampState, details: bool, use_color: bool) {
    let value_color = use_color.then_some(Color::Green);
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Field", use_color),
        header_cell("Value", use_color),
    ]);
    table.add_row(vec![
        label_cell("Unix Timestamp", use_color),
        styled_cell(
            &field_text(state.epoch_text(), state.epoch_state()),
            value_color,
            true,
        ),
    ]);
    let date_label = match state.mode() {
        TimezoneMode::Utc => "Date & Time (UTC)".to_string(),
        TimezoneMode::Local(zone) => format!("Date & Time ({})", zone.name()),
    };
    table.add_row(vec![
        label_cell(&date_label, use_color),
        styled_cell(
            &field_text(state.date_text(), state.date_state()),
            value_color,
            false,
        ),
    ]);
    println!("{table}");

    if details && let Some(fields) = state.details() {
        print_details(&fields, use_color);
    }
}

fn print_details(fields: &DerivedFields, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Year", use_color),
        header_cell("Month", use_color),
        header_cell("Day", use_color),
        header_cell("Weekday", use_color),
        header_cell("Hour", use_color),
        header_cell("Minute", use_color),
        header_cell("Second", use_color),
        header_cell("Timezone", use_color),
    ]);
    table.add_row(vec![
        styled_cell(&fields.year.to_string(), None, false),
        styled_cell(&fields.month, None, false),
        styled_cell(&fields.day.to_string(), None, false),
        styled_cell(&fields.weekday, None, false),
        styled_cell(&fields.hour, None, false),
        styled_cell(&fields.minute, None, false),
        styled_cell(&fields.second, None, false),
        styled_cell(&fields.timezone, None, false),
    ]);
    println!("\n  Parsed Details");
    println!("{table}");
}

pub(crate) fn output_conversion_json(state: &TimestampState, details: bool) -> String {
    let mut value = serde_json::json!({
        "epoch": state.epoch_text(),
        "epoch_state": state.epoch_state(),
        "date": state.date_text(),
        "date_state": state.date_state(),
        "mode": mode_name(state.mode()),
        "timezone": state.zone().name(),
    });
    if details && let Some(fields) = state.details() {
        value["details"] = serde_json::json!(fields);
    }
    to_json(&value)
}

pub(crate) fn render_current_time(now: &CurrentTime, use_color: bool) -> String {
    if use_color {
        format!("\x1b[32m{}\x1b[0m  {}", now.unix, now.human)
    } else {
        format!("{}  {}", now.unix, now.human)
    }
}

pub(crate) fn output_current_time_json(now: &CurrentTime) -> String {
    serde_json::to_string(now).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Failed to serialize JSON: {e}") }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Timezone;

    fn utc_state() -> TimestampState {
        TimestampState::new(Timezone::Named(chrono_tz::UTC), true)
    }

    #[test]
    fn json_for_valid_epoch() {
        let mut state = utc_state();
        state.set_epoch_text("0");
        let json: serde_json::Value =
            serde_json::from_str(&output_conversion_json(&state, true)).unwrap();
        assert_eq!(json["epoch"], "0");
        assert_eq!(json["date"], "1970-01-01T00:00:00.000Z");
        assert_eq!(json["epoch_state"], "valid");
        assert_eq!(json["mode"], "utc");
        assert_eq!(json["timezone"], "UTC");
        assert_eq!(json["details"]["year"], 1970);
        assert_eq!(json["details"]["weekday"], "Thursday");
    }

    #[test]
    fn json_for_invalid_input_has_no_details() {
        let mut state = utc_state();
        state.set_epoch_text("nope");
        let json: serde_json::Value =
            serde_json::from_str(&output_conversion_json(&state, true)).unwrap();
        assert_eq!(json["epoch_state"], "invalid");
        assert_eq!(json["date_state"], "empty");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn field_text_marks_invalid() {
        assert_eq!(field_text("abc", FieldState::Invalid), "abc (invalid)");
        assert_eq!(field_text("", FieldState::Empty), "-");
        assert_eq!(field_text("0", FieldState::Valid), "0");
    }

    #[test]
    fn current_time_plain_and_json() {
        let now = CurrentTime {
            unix: 0,
            human: "1/1/1970, 12:00:00 AM".to_string(),
        };
        assert_eq!(render_current_time(&now, false), "0  1/1/1970, 12:00:00 AM");
        let json: serde_json::Value =
            serde_json::from_str(&output_current_time_json(&now)).unwrap();
        assert_eq!(json["unix"], 0);
    }
}
