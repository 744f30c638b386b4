use std::fmt;

/// Matching modifiers accepted by the regex tester: `g`, `i`, `m`, `s`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Flags {
    /// `g`: report every match instead of the first
    pub(crate) global: bool,
    /// `i`: case-insensitive
    pub(crate) ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub(crate) multi_line: bool,
    /// `s`: `.` also matches `\n`
    pub(crate) dot_all: bool,
}

impl Flags {
    /// Parse a flag string. Unknown or repeated characters are rejected with
    /// the message shown to the user.
    pub(crate) fn parse(raw: &str) -> Result<Self, String> {
        let mut flags = Flags::default();
        for c in raw.chars() {
            let slot = match c {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_all,
                _ => return Err(invalid_flags(raw)),
            };
            if *slot {
                return Err(invalid_flags(raw));
            }
            *slot = true;
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, c) in [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
        ] {
            if on {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

fn invalid_flags(raw: &str) -> String {
    format!("Invalid flags supplied to RegExp constructor '{raw}'")
}

/// Add `flag` to the flag string, or remove it if already present
pub(crate) fn toggle_flag(flags: &str, flag: char) -> String {
    if flags.contains(flag) {
        flags.replace(flag, "")
    } else {
        let mut out = flags.to_string();
        out.push(flag);
        out
    }
}
