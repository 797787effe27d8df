//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while parsing or validating core values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid time of day {0:?}: expected HH:MM or HH:MM:SS")]
    InvalidTimeOfDay(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ph-core`.
pub type CoreResult<T> = Result<T, CoreError>;
