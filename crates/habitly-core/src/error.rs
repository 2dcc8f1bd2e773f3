//! Core error types for habitly-core.
//!
//! This module defines a comprehensive error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Remote store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication/session errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the remote habit store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure (connection, timeout, invalid body)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status or a non-success envelope
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A success envelope arrived without the expected payload
    #[error("API response was missing its result payload")]
    MissingResult,

    /// The request requires a signed-in user
    #[error("Not authenticated: sign in before calling the store")]
    Unauthorized,

    /// A request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The base URL in the configuration cannot be parsed
    #[error("Invalid store base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Authentication/session errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No session file on disk
    #[error("Not signed in")]
    NotSignedIn,

    /// Keyring lookup or storage failed
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Session file exists but cannot be read or parsed
    #[error("Failed to load session from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Session file cannot be written
    #[error("Failed to save session to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home directory could not be determined
    #[error("Could not determine the configuration directory: {0}")]
    NoConfigDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A date string that is neither `YYYY-MM-DD` nor RFC 3339
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A reminder that is not a valid `HH:mm` time of day
    #[error("Invalid reminder time '{value}': expected HH:mm")]
    InvalidReminderTime { value: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
