//! Error types for pushdown translation.
//!
//! Translation has two failure channels. An expression the target cannot
//! express is not an error at all: it surfaces as `Ok(None)` and the host
//! evaluates that subtree locally. A `PushdownError` means the caller broke a
//! contract, e.g. by handing over an enumerated constant outside its domain.

use thiserror::Error;

/// The main error type for pushdown operations.
#[derive(Debug, Error)]
pub enum PushdownError {
    /// A weekday constant matched none of the recognized spellings.
    #[error("Unknown weekday: '{0}'. Expected a day name such as MO, MON or MONDAY")]
    UnknownWeekday(String),

    /// A dialect version string could not be parsed.
    #[error("Invalid dialect version: '{0}'. Expected MAJOR[.MINOR[.PATCH]]")]
    InvalidVersion(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON expression tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PushdownError {
    /// Create an unknown weekday error.
    pub fn unknown_weekday(name: impl Into<String>) -> Self {
        Self::UnknownWeekday(name.into())
    }
}

/// Result type alias for pushdown operations.
pub type PushdownResult<T> = Result<T, PushdownError>;
