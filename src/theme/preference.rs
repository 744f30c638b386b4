use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// What the user asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemePreference {
    Dark,
    Light,
    #[default]
    System,
}

/// What actually gets applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ResolvedTheme {
    Dark,
    Light,
}

impl ThemePreference {
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            "system" => Ok(ThemePreference::System),
            _ => Err(AppError::InvalidTheme {
                input: raw.to_string(),
            }),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
            ThemePreference::System => "system",
        }
    }

    /// Toggle order: dark → light → system → dark
    pub(crate) fn next(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::System,
            ThemePreference::System => ThemePreference::Dark,
        }
    }

    pub(crate) fn resolve(self, prefers_light: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::System if prefers_light => ResolvedTheme::Light,
            ThemePreference::System => ResolvedTheme::Dark,
        }
    }

    /// Tooltip for the toggle control
    pub(crate) fn label(self) -> &'static str {
        match self {
            ThemePreference::System => "Use system theme",
            ThemePreference::Dark => "Switch to light mode",
            ThemePreference::Light => "Switch to dark mode",
        }
    }
}

impl ResolvedTheme {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Dark => "dark",
            ResolvedTheme::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
