use comfy_table::Color;

use crate::nav::{BRAND_SUBTITLE, BRAND_TITLE};
use crate::output::format::{create_styled_table, header_cell, styled_cell, to_json};
use crate::registry::ToolDescriptor;

/// Home page: every tool with its route
pub(crate) fn print_tools_table(tools: &[ToolDescriptor], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("", use_color),
        header_cell("Tool", use_color),
        header_cell("Description", use_color),
        header_cell("Route", use_color),
    ]);
    for tool in tools {
        table.add_row(vec![
            styled_cell(tool.icon.glyph(), None, false),
            styled_cell(tool.name, use_color.then_some(Color::Green), true),
            styled_cell(tool.description, None, false),
            styled_cell(&tool.route(), use_color.then_some(Color::DarkGrey), false),
        ]);
    }

    println!("\n  {BRAND_TITLE} - {BRAND_SUBTITLE}\n");
    println!("{table}");
}

pub(crate) fn output_tools_json(tools: &[ToolDescriptor]) -> String {
    let rows: Vec<_> = tools
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name,
                "slug": tool.slug,
                "description": tool.description,
                "icon": tool.icon,
                "route": tool.route(),
            })
        })
        .collect();
    to_json(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TOOLS;

    #[test]
    fn json_lists_every_tool_with_route() {
        let json: serde_json::Value = serde_json::from_str(&output_tools_json(&TOOLS)).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), TOOLS.len());
        assert_eq!(arr[6]["slug"], "regex");
        assert_eq!(arr[6]["route"], "/tools/regex");
        assert_eq!(arr[6]["icon"], "regex");
    }
}
