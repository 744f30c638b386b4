use comfy_table::Color;

use crate::output::format::{
    create_styled_table, header_cell, plural, render_segments, styled_cell, to_json,
};
use crate::pattern::{CommonPattern, Evaluation, highlight};

pub(crate) struct RegexView<'a> {
    pub(crate) pattern: &'a str,
    pub(crate) flags: &'a str,
    pub(crate) text: &'a str,
    pub(crate) evaluation: &'a Evaluation,
}

fn groups_label(groups: &[String]) -> String {
    groups
        .iter()
        .map(|g| if g.is_empty() { "(empty)" } else { g.as_str() })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn print_regex_result(view: &RegexView<'_>, use_color: bool) {
    let eval = view.evaluation;
    println!("\n  /{}/{}\n", view.pattern, view.flags);

    if let Some(error) = &eval.error_message {
        if use_color {
            println!("  \x1b[31m{error}\x1b[0m\n");
        } else {
            println!("  Error: {error}\n");
        }
    }

    println!(
        "  Result ({})",
        plural(eval.matches.len(), "match", "matches")
    );
    let segments = highlight(view.text, &eval.matches);
    println!("{}\n", render_segments(&segments, use_color));

    if eval.matches.is_empty() {
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Match", use_color),
        header_cell("Index", use_color),
        header_cell("Groups", use_color),
    ]);
    for (i, m) in eval.matches.iter().enumerate() {
        table.add_row(vec![
            styled_cell(&(i + 1).to_string(), None, false),
            styled_cell(&format!("{:?}", m.text), use_color.then_some(Color::Green), false),
            styled_cell(&m.index.to_string(), None, false),
            styled_cell(&groups_label(&m.groups), use_color.then_some(Color::Blue), false),
        ]);
    }
    println!("{table}");
}

pub(crate) fn output_regex_json(view: &RegexView<'_>) -> String {
    let eval = view.evaluation;
    let segments = highlight(view.text, &eval.matches);
    to_json(&serde_json::json!({
        "pattern": view.pattern,
        "flags": view.flags,
        "compiled_ok": eval.compiled_ok,
        "error": eval.error_message,
        "match_count": eval.matches.len(),
        "matches": eval.matches,
        "segments": segments,
    }))
}

pub(crate) fn print_presets_table(presets: &[CommonPattern], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Key", use_color),
        header_cell("Name", use_color),
        header_cell("Pattern", use_color),
    ]);
    for preset in presets {
        table.add_row(vec![
            styled_cell(preset.key, use_color.then_some(Color::Green), true),
            styled_cell(preset.name, None, false),
            styled_cell(preset.pattern, None, false),
        ]);
    }
    println!("{table}");
}

pub(crate) fn output_presets_json(presets: &[CommonPattern]) -> String {
    to_json(&presets)
}
