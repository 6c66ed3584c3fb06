use std::io;
use thiserror::Error;

/// Custom error type for the Blinky viewer
#[derive(Error, Debug)]
pub enum BlinkyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for the Blinky viewer
pub type Result<T> = std::result::Result<T, BlinkyError>;

impl BlinkyError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BlinkyError::Config(msg.into())
    }

    /// Create an invalid endpoint error
    pub fn invalid_endpoint<S: Into<String>>(msg: S) -> Self {
        BlinkyError::InvalidEndpoint(msg.into())
    }

    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        BlinkyError::Terminal(msg.into())
    }
}
