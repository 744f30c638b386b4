use crate::nav::{BRAND_SUBTITLE, BRAND_TITLE, Sidebar};
use crate::output::format::to_json;
use crate::theme::PreferenceStore;

/// Render the sidebar as plain lines. Collapsed shows icons only.
pub(crate) fn render_sidebar<S: PreferenceStore>(sidebar: &Sidebar<S>, use_color: bool) -> String {
    let mut lines = Vec::new();

    if sidebar.collapsed() {
        lines.push("[W]".to_string());
    } else {
        lines.push(format!("{BRAND_TITLE}  ({BRAND_SUBTITLE})"));
    }
    lines.push(format!("  <{}>", sidebar.collapse_label()));
    lines.push(String::new());

    for item in sidebar.items() {
        let marker = if item.active { ">" } else { " " };
        let text = if sidebar.collapsed() {
            item.tool.icon.glyph().to_string()
        } else {
            format!("{} {}", item.tool.icon.glyph(), item.tool.name)
        };
        let line = format!("{marker} {text}");
        if item.active && use_color {
            lines.push(format!("\x1b[1;36m{line}\x1b[0m"));
        } else {
            lines.push(line);
        }
    }

    lines.push(String::new());
    let theme = sidebar.theme();
    lines.push(format!(
        "  theme: {} ({}) <{}>",
        theme.preference(),
        theme.resolved(),
        theme.label()
    ));
    if sidebar.mobile_open() {
        lines.push("  [mobile panel open]".to_string());
    }
    lines.join("\n")
}

pub(crate) fn output_sidebar_json<S: PreferenceStore>(sidebar: &Sidebar<S>) -> String {
    let theme = sidebar.theme();
    let items: Vec<_> = sidebar
        .items()
        .into_iter()
        .map(|item| {
            serde_json::json!({
                "name": item.tool.name,
                "route": item.route,
                "icon": item.tool.icon,
                "active": item.active,
            })
        })
        .collect();
    to_json(&serde_json::json!({
        "active_route": sidebar.active_route(),
        "collapsed": sidebar.collapsed(),
        "mobile_open": sidebar.mobile_open(),
        "collapse_label": sidebar.collapse_label(),
        "items": items,
        "theme": {
            "preference": theme.preference(),
            "resolved": theme.resolved(),
            "label": theme.label(),
        },
    }))
}
