//! Diagnostics via `tracing`, written to stderr.
//!
//! Quiet by default (warnings only). `--debug` raises the level for this
//! crate; `RUST_LOG` overrides both.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogConfig {
    pub(crate) level: LevelFilter,
    pub(crate) with_ansi: bool,
}

impl LogConfig {
    pub(crate) fn from_flags(debug: bool, with_ansi: bool) -> Self {
        LogConfig {
            level: if debug {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            },
            with_ansi,
        }
    }
}

pub(crate) fn init_logging(config: LogConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time()
        .finish();
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn build_env_filter(level: LevelFilter) -> EnvFilter {
    let level = level.to_string().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,wisetools={level}")))
}
