use serde::Serialize;

/// A ready-made pattern offered alongside the tester
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct CommonPattern {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) pattern: &'static str,
}

pub(crate) static COMMON_PATTERNS: [CommonPattern; 6] = [
    CommonPattern {
        key: "email",
        name: "Email",
        pattern: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
    },
    CommonPattern {
        key: "url",
        name: "URL",
        pattern: r"https?://[\w\-._~:/?#\[\]@!$&'()*+,;=%]+",
    },
    CommonPattern {
        key: "phone",
        name: "Phone",
        pattern: r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    },
    CommonPattern {
        key: "ip",
        name: "IP Address",
        pattern: r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b",
    },
    CommonPattern {
        key: "date",
        name: "Date (YYYY-MM-DD)",
        pattern: r"\d{4}-\d{2}-\d{2}",
    },
    CommonPattern {
        key: "hex-color",
        name: "Hex Color",
        pattern: r"#[0-9a-fA-F]{3,6}\b",
    },
];

/// Find a preset by key or display name, ignoring case
pub(crate) fn find_pattern(name: &str) -> Option<&'static CommonPattern> {
    let name = name.trim();
    COMMON_PATTERNS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
}
