use lolspeak::LolError;
use thiserror::Error;

/// Errors from loading a dictionary or driving a file translation
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Dictionary error: {0}")]
    Table(#[from] LolError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
