//! Tool registry
//!
//! Static table of every tool the suite knows about. Consumed by the home
//! listing and the navigation sidebar.

use serde::Serialize;

use crate::consts::TOOL_ROUTE_PREFIX;

/// Icon key used by the renderer to pick a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum IconKey {
    Jwt,
    Uuid,
    Base64,
    Hash,
    Json,
    Password,
    Regex,
    Timestamp,
}

impl IconKey {
    /// Short terminal glyph standing in for the page icon
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            IconKey::Jwt => "[jwt]",
            IconKey::Uuid => "[id]",
            IconKey::Base64 => "[64]",
            IconKey::Hash => "[#]",
            IconKey::Json => "[{}]",
            IconKey::Password => "[**]",
            IconKey::Regex => "[.*]",
            IconKey::Timestamp => "[ts]",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) slug: &'static str,
    pub(crate) description: &'static str,
    pub(crate) icon: IconKey,
}

impl ToolDescriptor {
    pub(crate) fn route(&self) -> String {
        format!("{TOOL_ROUTE_PREFIX}{}", self.slug)
    }
}

/// All registered tools, in display order
pub(crate) static TOOLS: [ToolDescriptor; 8] = [
    ToolDescriptor {
        name: "JWT Tools",
        slug: "jwt",
        description: "Generate, decode, and verify JWT tokens",
        icon: IconKey::Jwt,
    },
    ToolDescriptor {
        name: "UUID Generator",
        slug: "uuid",
        description: "Generate UUIDs in various formats",
        icon: IconKey::Uuid,
    },
    ToolDescriptor {
        name: "Base64",
        slug: "base64",
        description: "Encode and decode Base64 strings",
        icon: IconKey::Base64,
    },
    ToolDescriptor {
        name: "Hash Generator",
        slug: "hash",
        description: "Generate MD5, SHA-1, SHA-256 hashes",
        icon: IconKey::Hash,
    },
    ToolDescriptor {
        name: "JSON Formatter",
        slug: "json",
        description: "Format, validate, and minify JSON",
        icon: IconKey::Json,
    },
    ToolDescriptor {
        name: "Password Generator",
        slug: "password",
        description: "Generate secure random passwords",
        icon: IconKey::Password,
    },
    ToolDescriptor {
        name: "Regex Tester",
        slug: "regex",
        description: "Test regular expressions with live matching",
        icon: IconKey::Regex,
    },
    ToolDescriptor {
        name: "Timestamp Converter",
        slug: "timestamp",
        description: "Convert between Unix timestamps and dates",
        icon: IconKey::Timestamp,
    },
];

/// Look up a tool by slug (case-insensitive)
pub(crate) fn get_tool(slug: &str) -> Option<&'static ToolDescriptor> {
    let slug = slug.trim().to_lowercase();
    TOOLS.iter().find(|t| t.slug == slug)
}

/// Resolve a route such as `/tools/regex` back to its tool
pub(crate) fn tool_for_route(route: &str) -> Option<&'static ToolDescriptor> {
    let slug = route.strip_prefix(TOOL_ROUTE_PREFIX)?;
    get_tool(slug.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for tool in &TOOLS {
            assert!(seen.insert(tool.slug), "duplicate slug {}", tool.slug);
            assert!(
                tool.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug not URL-safe: {}",
                tool.slug
            );
        }
    }

    #[test]
    fn get_tool_by_slug() {
        assert_eq!(get_tool("regex").map(|t| t.name), Some("Regex Tester"));
        assert_eq!(get_tool("Timestamp").map(|t| t.icon), Some(IconKey::Timestamp));
        assert!(get_tool("unknown").is_none());
    }

    #[test]
    fn route_round_trip() {
        for tool in &TOOLS {
            let route = tool.route();
            assert!(route.starts_with("/tools/"));
            assert_eq!(tool_for_route(&route).map(|t| t.slug), Some(tool.slug));
        }
    }

    #[test]
    fn tool_for_route_rejects_other_paths() {
        assert!(tool_for_route("/").is_none());
        assert!(tool_for_route("/about").is_none());
        assert!(tool_for_route("/tools/nope").is_none());
    }
}
