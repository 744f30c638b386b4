use crate::consts::APPEARANCE_ENV;

/// Ambient "prefers light appearance" signal
pub(crate) trait AppearanceProbe {
    fn prefers_light(&self) -> bool;
}

/// Reads the signal from the environment: an explicit
/// `WISETOOLS_APPEARANCE`, else the terminal's `COLORFGBG` background.
pub(crate) struct EnvAppearance;

impl AppearanceProbe for EnvAppearance {
    fn prefers_light(&self) -> bool {
        prefers_light_from(
            std::env::var(APPEARANCE_ENV).ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    }
}

fn prefers_light_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(value) = explicit {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => return true,
            "dark" => return false,
            _ => {}
        }
    }
    // "fg;bg" or "fg;default;bg"; 7 and 15 are the light greys/white
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .is_some_and(|bg| matches!(bg.trim(), "7" | "15"))
}

#[cfg(test)]
pub(crate) struct FixedAppearance(pub(crate) bool);

#[cfg(test)]
impl AppearanceProbe for FixedAppearance {
    fn prefers_light(&self) -> bool {
        self.0
    }
}
