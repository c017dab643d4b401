//! # Error Types
//!
//! Structured error types for verdict_core. Only [`ScanError::EmptyMessage`]
//! and [`ScanError::Busy`] are handled silently; everything that comes back
//! from the classifier call is surfaced to the user through the same notice.
//!
//! ## Example
//!
//! ```rust
//! use verdict_core::errors::{ScanError, ScanResult};
//!
//! fn require_text(input: &str) -> ScanResult<&str> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         return Err(ScanError::EmptyMessage);
//!     }
//!     Ok(trimmed)
//! }
//!
//! assert_eq!(require_text("  hi "), Ok("hi"));
//! assert_eq!(require_text(" \n "), Err(ScanError::EmptyMessage));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for verdict_core operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Text shown in the blocking notice for every failed classification
pub const CONNECTION_NOTICE: &str = "Server connection failed. Ensure backend is running.";

/// Structured error type for the submit/classify cycle.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ScanError {
    /// The trimmed input was empty
    #[error("Message is empty")]
    EmptyMessage,

    /// A submission is already in flight
    #[error("A message is already being analyzed")]
    Busy,

    /// The classifier answered with a non-success status
    #[error("Server error: {status}")]
    Server { status: u16 },

    /// The request never got an HTTP answer
    #[error("Transport error: {reason}")]
    Transport { reason: String },

    /// Success status, but the body is not a classification result
    #[error("Decode error: {reason}")]
    Decode { reason: String },

    /// Client configuration is unusable
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScanError {
    /// Create a Transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        ScanError::Transport {
            reason: reason.into(),
        }
    }

    /// Create a Decode error
    pub fn decode(reason: impl Into<String>) -> Self {
        ScanError::Decode {
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ScanError::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is shown to the user as a blocking notice.
    ///
    /// Validation and busy rejections stay local.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ScanError::EmptyMessage | ScanError::Busy)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ScanError::EmptyMessage => "EMPTY_MESSAGE",
            ScanError::Busy => "BUSY",
            ScanError::Server { .. } => "SERVER_ERROR",
            ScanError::Transport { .. } => "TRANSPORT_ERROR",
            ScanError::Decode { .. } => "DECODE_ERROR",
            ScanError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ScanError::decode(err.to_string())
        } else if let Some(status) = err.status() {
            ScanError::Server {
                status: status.as_u16(),
            }
        } else {
            ScanError::transport(err.to_string())
        }
    }
}
