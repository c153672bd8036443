//! Error types for measurement operations.

use thiserror::Error;

/// Result type for measurement operations.
pub type Result<T> = std::result::Result<T, MeasureError>;

/// Errors that can occur while configuring or driving a measurement.
///
/// Operations issued in the wrong session state are not errors; they are
/// ignored and reported through their return value.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// A unit label could not be parsed.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Invalid engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MeasureError {
    /// Creates an unknown unit error.
    #[must_use]
    pub fn unknown_unit(label: impl Into<String>) -> Self {
        Self::UnknownUnit(label.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
