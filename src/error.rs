//! Error types for the optypo library.
//!
//! All fallible operations return [`OptypoError`] through the crate-wide
//! [`Result`] alias. Configuration problems (unknown presets, duplicate
//! entries, a zero threshold) are reported here once, at load time; the
//! classifier itself never fails.
//!
//! # Examples
//!
//! ```
//! use optypo::error::{OptypoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OptypoError::config("threshold must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for optypo operations.
#[derive(Error, Debug)]
pub enum OptypoError {
    /// I/O errors (reading config, preset tables or documents)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A preset name that is not present in the registry
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// An error with context attached by the CLI host
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OptypoError.
pub type Result<T> = std::result::Result<T, OptypoError>;

impl OptypoError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        OptypoError::Config(msg.into())
    }

    /// Create a new unknown preset error.
    pub fn unknown_preset<S: Into<String>>(name: S) -> Self {
        OptypoError::UnknownPreset(name.into())
    }

    /// Whether this error was raised while validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, OptypoError::Config(_) | OptypoError::UnknownPreset(_))
    }
}
