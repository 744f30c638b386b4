use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::pattern::Segment;

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// A dim label cell for key/value tables
pub(super) fn label_cell(text: &str, use_color: bool) -> Cell {
    styled_cell(text, use_color.then_some(Color::DarkGrey), false)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Render highlight segments for a terminal. Marked spans get a yellow
/// background with color on, or `[...]` brackets without.
pub(super) fn render_segments(segments: &[Segment<'_>], use_color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        let text = segment.as_str();
        match segment {
            Segment::Literal(_) => out.push_str(text),
            Segment::Marked(_) if use_color => {
                out.push_str("\x1b[30;43m");
                out.push_str(text);
                out.push_str("\x1b[0m");
            }
            Segment::Marked(_) => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
        }
    }
    out
}

/// "1 match" / "3 matches"
pub(super) fn plural(count: usize, noun: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {plural}")
    }
}

/// Serialize for `--json`; serialization of these plain types cannot fail,
/// but a failure still produces valid JSON.
pub(super) fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Failed to serialize JSON: {e}") }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_without_color_use_brackets() {
        let segments = [
            Segment::Literal("call "),
            Segment::Marked("123"),
            Segment::Literal(" now"),
        ];
        assert_eq!(render_segments(&segments, false), "call [123] now");
    }

    #[test]
    fn segments_with_color_use_ansi() {
        let segments = [Segment::Marked("x")];
        assert_eq!(render_segments(&segments, true), "\x1b[30;43mx\x1b[0m");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "match", "matches"), "1 match");
        assert_eq!(plural(0, "match", "matches"), "0 matches");
        assert_eq!(plural(2, "match", "matches"), "2 matches");
    }

    #[test]
    fn to_json_is_pretty() {
        let json = to_json(&serde_json::json!({ "a": 1 }));
        assert_eq!(json, "{\n  \"a\": 1\n}");
    }
}
