use crate::output::format::to_json;
use crate::theme::{PreferenceStore, ThemeController};

pub(crate) fn print_theme<S: PreferenceStore>(theme: &ThemeController<S>, use_color: bool) {
    let resolved = if use_color {
        format!("\x1b[1m{}\x1b[0m", theme.resolved())
    } else {
        theme.resolved().to_string()
    };
    println!("Preference: {}", theme.preference());
    println!("Resolved:   {resolved}");
    println!("Next:       {}", theme.label());
    println!("{}", theme.attribute());
}

pub(crate) fn output_theme_json<S: PreferenceStore>(theme: &ThemeController<S>) -> String {
    to_json(&serde_json::json!({
        "preference": theme.preference(),
        "resolved": theme.resolved(),
        "label": theme.label(),
        "attribute": theme.attribute(),
    }))
}
