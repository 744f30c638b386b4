mod format;
mod nav;
mod pattern;
mod theme;
mod timestamp;
mod tools;

pub(crate) use nav::{output_sidebar_json, render_sidebar};
pub(crate) use pattern::{
    RegexView, output_presets_json, output_regex_json, print_presets_table, print_regex_result,
};
pub(crate) use theme::{output_theme_json, print_theme};
pub(crate) use timestamp::{
    output_conversion_json, output_current_time_json, print_conversion, render_current_time,
};
pub(crate) use tools::{output_tools_json, print_tools_table};
