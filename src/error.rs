use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Errors raised by the extension messaging host and dispatcher.
#[derive(Error, Debug)]
pub enum MessagingError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid message json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message of {0} bytes exceeds the frame limit")]
    FrameTooLarge(usize),
    #[error("no content responder is attached")]
    NotConnected,
    #[error("content responder closed the channel")]
    Closed,
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
