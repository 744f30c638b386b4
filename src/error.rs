use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid theme \"{input}\" (expected dark, light or system)")]
    InvalidTheme { input: String },

    #[error("Unknown tool: {slug}")]
    UnknownTool { slug: String },

    #[error("Unknown pattern preset: {name}")]
    UnknownPattern { name: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("No writable config directory found")]
    NoHome,

    #[error("Failed to access preference store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt preference store {}: {source}", path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}
