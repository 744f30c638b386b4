use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::{APP_NAME, HOME_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Zone used for local rendering, e.g. "Europe/Berlin"
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Render converted dates as UTC instead of local time
    #[serde(default)]
    pub(crate) utc: bool,
    /// Default regex flags
    #[serde(default)]
    pub(crate) flags: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    /// Load the first config file that parses. Returns the path it came from.
    pub(crate) fn load() -> (Self, Option<PathBuf>) {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return (config, Some(path)),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        (Self::default(), None)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 0. Explicit override: $WISETOOLS_HOME/config.toml
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
            paths.push(PathBuf::from(dir).join("config.toml"));
        }

        // 1. XDG config: ~/.config/wisetools/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.wisetools.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}
