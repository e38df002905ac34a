//! Error types for homewatch-core.
//!
//! Every failure a poll cycle can hit maps to one variant here. The loop
//! catches `PollError` at a single dispatch point; the kind only drives
//! logging and notification text, never differentiated recovery.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors: settings file and environment credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Settings file exists but is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Status API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure while talking to the endpoint.
    #[error("Status API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200.
    #[error("Status endpoint unavailable: HTTP {status}")]
    Unavailable { status: u16 },

    /// The response body does not have the expected shape.
    #[error("Malformed status response: {0}")]
    Shape(String),
}

/// Telegram delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Connection-level failure while talking to the Bot API.
    #[error("Telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Bot API rejected the send.
    #[error("Telegram API error: {description}")]
    Api { description: String },
}

/// Top-level error for a single poll cycle.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Notify(#[from] NotifyError),

    /// A homework record is missing a required field.
    #[error("Homework record is missing field '{0}'")]
    MissingField(&'static str),

    /// Status code not present in the verdict table.
    #[error("Unknown homework status '{0}'")]
    UnknownStatus(String),
}
