//! Theme preference
//!
//! A tri-state preference (dark, light, system) persisted under a single
//! key and resolved against the ambient appearance signal.

mod appearance;
mod preference;
mod store;

pub(crate) use appearance::{AppearanceProbe, EnvAppearance};
#[cfg(test)]
pub(crate) use appearance::FixedAppearance;
pub(crate) use preference::{ResolvedTheme, ThemePreference};
#[cfg(test)]
pub(crate) use store::MemoryStore;
pub(crate) use store::{FileStore, PreferenceStore};

use tracing::{debug, warn};

use crate::consts::THEME_KEY;
use crate::error::StoreError;

/// Name of the document-level attribute carrying the resolved theme
pub(crate) const THEME_ATTRIBUTE: &str = "data-theme";

/// Owns the preference, its resolution and its persistence
pub(crate) struct ThemeController<S: PreferenceStore> {
    store: S,
    preference: ThemePreference,
    resolved: ResolvedTheme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored preference; absent or unrecognised values mean `system`.
    pub(crate) fn load(store: S, probe: &dyn AppearanceProbe) -> Result<Self, StoreError> {
        let stored = store.get(THEME_KEY)?;
        let preference = match stored.as_deref().map(ThemePreference::parse) {
            Some(Ok(pref)) => pref,
            Some(Err(e)) => {
                warn!("ignoring stored theme: {e}");
                ThemePreference::default()
            }
            None => ThemePreference::default(),
        };
        let resolved = preference.resolve(probe.prefers_light());
        debug!(%preference, %resolved, "theme loaded");
        Ok(ThemeController {
            store,
            preference,
            resolved,
        })
    }

    pub(crate) fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub(crate) fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    /// Advance dark → light → system → dark and persist
    pub(crate) fn toggle(&mut self, probe: &dyn AppearanceProbe) -> Result<ThemePreference, StoreError> {
        self.set(self.preference.next(), probe)?;
        Ok(self.preference)
    }

    pub(crate) fn set(
        &mut self,
        preference: ThemePreference,
        probe: &dyn AppearanceProbe,
    ) -> Result<(), StoreError> {
        self.preference = preference;
        self.resolved = preference.resolve(probe.prefers_light());
        self.store.set(THEME_KEY, preference.as_str())
    }

    pub(crate) fn label(&self) -> &'static str {
        self.preference.label()
    }

    /// e.g. `data-theme="dark"`
    pub(crate) fn attribute(&self) -> String {
        format!("{THEME_ATTRIBUTE}=\"{}\"", self.resolved)
    }
}
