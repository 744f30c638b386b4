//! CLI subcommand definitions
//!
//! One subcommand per page of the suite.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::nav::HOME_ROUTE;
use crate::theme::ThemePreference;
use crate::timestamp::Preset;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every tool (default)
    Tools,
    /// Show the navigation sidebar
    Nav(NavArgs),
    /// Test a regular expression against some text
    Regex(RegexArgs),
    /// Convert between Unix timestamps and dates
    Timestamp(TimestampArgs),
    /// Show the current time
    Now(NowArgs),
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Args)]
pub(crate) struct NavArgs {
    /// Active route, e.g. /tools/regex
    #[arg(long, default_value = HOME_ROUTE)]
    pub(crate) route: String,

    /// Render the collapsed (icon-only) sidebar
    #[arg(long)]
    pub(crate) collapsed: bool,

    /// Render the mobile panel as open
    #[arg(long)]
    pub(crate) mobile_open: bool,

    /// Cycle the theme preference from the sidebar button
    #[arg(long)]
    pub(crate) toggle_theme: bool,
}

#[derive(Args)]
pub(crate) struct RegexArgs {
    /// Pattern to test (empty matches nothing)
    pub(crate) pattern: Option<String>,

    /// Flags: any of g, i, m, s (default "g")
    #[arg(short, long)]
    pub(crate) flags: Option<String>,

    /// Toggle a single flag on top of the defaults (repeatable)
    #[arg(short, long, value_name = "FLAG")]
    pub(crate) toggle: Vec<char>,

    /// Use a common pattern instead (email, url, phone, ip, date, hex-color)
    #[arg(short, long, conflicts_with = "pattern")]
    pub(crate) preset: Option<String>,

    /// Text to search (defaults to stdin, or a sample text on a terminal)
    #[arg(long, conflicts_with = "file")]
    pub(crate) text: Option<String>,

    /// Read the text to search from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,

    /// List the common patterns and exit
    #[arg(long)]
    pub(crate) list_presets: bool,
}

#[derive(Args)]
pub(crate) struct TimestampArgs {
    /// Epoch seconds/milliseconds, or a date to convert to epoch seconds
    #[arg(allow_negative_numbers = true)]
    pub(crate) value: Option<String>,

    /// Render dates in UTC (ISO-8601)
    #[arg(long, conflicts_with = "local")]
    pub(crate) utc: bool,

    /// Render dates in local time (overrides `utc = true` in config)
    #[arg(long)]
    pub(crate) local: bool,

    /// Convert the current time
    #[arg(long, conflicts_with_all = ["value", "preset"])]
    pub(crate) now: bool,

    /// Convert an offset from the current time
    #[arg(long, value_enum, conflicts_with = "value")]
    pub(crate) preset: Option<Preset>,

    /// Show the calendar breakdown
    #[arg(short, long)]
    pub(crate) details: bool,

    /// Copy the converted value to the clipboard
    #[arg(long)]
    pub(crate) copy: bool,
}

#[derive(Args)]
pub(crate) struct NowArgs {
    /// Refresh once per second until interrupted
    #[arg(short, long)]
    pub(crate) watch: bool,

    /// Stop watching after this many refreshes
    #[arg(long, requires = "watch")]
    pub(crate) count: Option<u64>,

    /// Copy the current Unix timestamp to the clipboard
    #[arg(long)]
    pub(crate) copy: bool,
}

#[derive(Subcommand, Clone, Copy)]
pub(crate) enum ThemeAction {
    /// Show the stored preference and resolved theme (default)
    Show,
    /// Cycle dark → light → system
    Toggle,
    /// Store a specific preference
    Set {
        #[arg(value_enum)]
        preference: ThemePreference,
    },
}
