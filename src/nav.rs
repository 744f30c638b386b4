//! Navigation sidebar state

use crate::error::StoreError;
use crate::registry::{TOOLS, ToolDescriptor, tool_for_route};
use crate::theme::{AppearanceProbe, PreferenceStore, ThemeController};

pub(crate) const BRAND_TITLE: &str = "WiseTools";
pub(crate) const BRAND_SUBTITLE: &str = "Developer Utilities";
pub(crate) const HOME_ROUTE: &str = "/";

/// Normalise a route to the form the sidebar highlights, e.g.
/// `/tools/Regex/` becomes `/tools/regex`. `None` for unknown routes.
pub(crate) fn canonical_route(route: &str) -> Option<String> {
    let route = route.trim();
    if route == HOME_ROUTE {
        return Some(HOME_ROUTE.to_string());
    }
    tool_for_route(route).map(ToolDescriptor::route)
}

#[derive(Debug, Clone)]
pub(crate) struct NavItem {
    pub(crate) tool: &'static ToolDescriptor,
    pub(crate) route: String,
    pub(crate) active: bool,
}

pub(crate) struct Sidebar<S: PreferenceStore> {
    active_route: String,
    collapsed: bool,
    mobile_open: bool,
    theme: ThemeController<S>,
}

impl<S: PreferenceStore> Sidebar<S> {
    pub(crate) fn new(active_route: &str, theme: ThemeController<S>) -> Self {
        Sidebar {
            active_route: active_route.to_string(),
            collapsed: false,
            mobile_open: false,
            theme,
        }
    }

    pub(crate) fn items(&self) -> Vec<NavItem> {
        TOOLS
            .iter()
            .map(|tool| {
                let route = tool.route();
                NavItem {
                    active: route == self.active_route,
                    tool,
                    route,
                }
            })
            .collect()
    }

    pub(crate) fn active_route(&self) -> &str {
        &self.active_route
    }

    /// Route changes always close the mobile panel
    pub(crate) fn navigate(&mut self, route: &str) {
        self.active_route = route.to_string();
        self.close_mobile();
    }

    pub(crate) fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub(crate) fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub(crate) fn collapse_label(&self) -> &'static str {
        if self.collapsed {
            "Expand sidebar"
        } else {
            "Collapse sidebar"
        }
    }

    pub(crate) fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub(crate) fn open_mobile(&mut self) {
        self.mobile_open = true;
    }

    pub(crate) fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    pub(crate) fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    pub(crate) fn toggle_theme(&mut self, probe: &dyn AppearanceProbe) -> Result<(), StoreError> {
        self.theme.toggle(probe).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FixedAppearance, MemoryStore, ThemePreference};

    fn sidebar(route: &str) -> Sidebar<MemoryStore> {
        let theme = ThemeController::load(MemoryStore::default(), &FixedAppearance(false)).unwrap();
        Sidebar::new(route, theme)
    }

    #[test]
    fn lists_every_tool_in_order() {
        let bar = sidebar(HOME_ROUTE);
        let slugs: Vec<_> = bar.items().iter().map(|i| i.tool.slug).collect();
        let expected: Vec<_> = TOOLS.iter().map(|t| t.slug).collect();
        assert_eq!(slugs, expected);
        assert!(bar.items().iter().all(|i| !i.active));
    }

    #[test]
    fn highlights_active_route() {
        let bar = sidebar("/tools/regex");
        let active: Vec<_> = bar
            .items()
            .into_iter()
            .filter(|i| i.active)
            .map(|i| i.tool.slug)
            .collect();
        assert_eq!(active, ["regex"]);
    }

    #[test]
    fn navigate_closes_mobile_panel() {
        let mut bar = sidebar(HOME_ROUTE);
        bar.open_mobile();
        assert!(bar.mobile_open());
        bar.navigate("/tools/timestamp");
        assert!(!bar.mobile_open());
        assert_eq!(bar.active_route(), "/tools/timestamp");
    }

    #[test]
    fn canonical_route_matches_highlighted_item() {
        for raw in ["/tools/regex", "/tools/Regex", "/tools/regex/", " /tools/REGEX "] {
            let route = canonical_route(raw).unwrap();
            assert_eq!(route, "/tools/regex", "{raw:?}");
            let mut bar = sidebar(HOME_ROUTE);
            bar.navigate(&route);
            assert_eq!(bar.items().iter().filter(|i| i.active).count(), 1, "{raw:?}");
        }
        assert_eq!(canonical_route("/").as_deref(), Some(HOME_ROUTE));
        assert!(canonical_route("/tools/qrcode").is_none());
        assert!(canonical_route("/about").is_none());
    }

    #[test]
    fn collapse_toggle_and_label() {
        let mut bar = sidebar(HOME_ROUTE);
        assert_eq!(bar.collapse_label(), "Collapse sidebar");
        bar.toggle_collapsed();
        assert!(bar.collapsed());
        assert_eq!(bar.collapse_label(), "Expand sidebar");
        bar.toggle_collapsed();
        assert!(!bar.collapsed());
    }

    #[test]
    fn theme_toggle_goes_through_controller() {
        let mut bar = sidebar(HOME_ROUTE);
        assert_eq!(bar.theme().preference(), ThemePreference::System);
        bar.toggle_theme(&FixedAppearance(false)).unwrap();
        assert_eq!(bar.theme().preference(), ThemePreference::Dark);
        bar.close_mobile();
        assert!(!bar.mobile_open());
    }
}
