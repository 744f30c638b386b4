mod app;
mod cli;
mod clipboard;
mod config;
mod consts;
mod error;
mod logging;
mod nav;
mod output;
mod pattern;
mod registry;
mod theme;
mod timestamp;
mod utils;

use std::io::IsTerminal;

use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::Config;
use logging::{LogConfig, init_logging};

fn main() {
    let (config, config_path) = Config::load();
    let cli = Cli::parse().with_config(&config);

    let ansi = std::io::stderr().is_terminal() && cli.use_color();
    init_logging(LogConfig::from_flags(cli.debug, ansi));
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
