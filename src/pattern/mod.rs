//! Regex tester
//!
//! Compiles a user pattern with `g`/`i`/`m`/`s` flags, collects matches
//! against a text buffer and splits the text into highlighted segments.
//! Everything here is pure: the same inputs always give the same output.

mod eval;
mod flags;
mod highlight;
mod presets;

pub(crate) use eval::{Evaluation, evaluate};
pub(crate) use flags::toggle_flag;
pub(crate) use highlight::{Segment, highlight};
pub(crate) use presets::{COMMON_PATTERNS, CommonPattern, find_pattern};

/// Flags the tester starts with
pub(crate) const DEFAULT_FLAGS: &str = "g";

/// Text the tester starts with when nothing else is supplied
pub(crate) const SAMPLE_TEXT: &str =
    "The quick brown fox jumps over the lazy dog.\nEmail: test@example.com\nPhone: 123-456-7890";
