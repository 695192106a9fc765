use std::path::PathBuf;

/// Errors raised when allocating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid board dimensions {height}x{width} (height and width must be >= 1)")]
    InvalidDimensions { height: usize, width: usize },
}

/// Errors that can occur while saving or loading a board file.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to open board file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create board file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed board file: expected {expected} integers, found {found}")]
    MalformedFile { expected: usize, found: usize },

    #[error("board file header is invalid: {0}")]
    InvalidDimensions(#[from] GridError),
}

/// Errors that end an interactive session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
