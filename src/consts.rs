/// Application name, used for config and store directories
pub(crate) const APP_NAME: &str = "wisetools";

/// Storage key holding the persisted theme preference
pub(crate) const THEME_KEY: &str = "wisetools-theme";

/// Overrides the directory holding the preference store
pub(crate) const HOME_ENV: &str = "WISETOOLS_HOME";

/// Forces the ambient appearance signal ("light" or "dark")
pub(crate) const APPEARANCE_ENV: &str = "WISETOOLS_APPEARANCE";

/// Route prefix for individual tool pages
pub(crate) const TOOL_ROUTE_PREFIX: &str = "/tools/";

/// Largest representable instant, in milliseconds either side of the epoch
pub(crate) const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;
