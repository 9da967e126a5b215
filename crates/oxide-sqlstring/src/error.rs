//! Error types for escaping and template substitution.

use thiserror::Error;

/// Errors that can occur while rendering values or templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// The value has no SQL literal form.
    #[error("invalid value {0}")]
    InvalidValue(String),

    /// The template is not text.
    #[error("invalid SQL string provided: {0}")]
    InvalidTemplate(String),

    /// An Oracle raw function call failed the structural check or names a
    /// function outside the allow-list.
    #[error("invalid SQL function call: {0}")]
    InvalidRawFunctionCall(String),

    /// An Oracle raw function call uses a format string other than the one
    /// accepted for that function.
    #[error("invalid format string for {function}. Expected format: {expected}")]
    InvalidRawFunctionFormat {
        /// Function name (`TO_TIMESTAMP_TZ` or `TO_DATE`).
        function: &'static str,
        /// The only accepted format literal.
        expected: &'static str,
    },

    /// An Oracle raw function call carries a date value that does not
    /// round-trip through the expected pattern.
    #[error("invalid date value for {function}. Expected format: '{expected}'")]
    InvalidRawFunctionValue {
        /// Function name (`TO_TIMESTAMP_TZ` or `TO_DATE`).
        function: &'static str,
        /// The pattern the value must already be written in.
        expected: &'static str,
    },

    /// A named template references a parameter absent from the mapping.
    #[error("named parameter \"{0}\" has no value in the given object")]
    MissingNamedParameter(String),

    /// A timezone string is not a recognised UTC offset.
    #[error("invalid timezone: {0}")]
    InvalidTimeZone(String),
}

/// Result type alias for escaping operations.
pub type Result<T> = std::result::Result<T, EscapeError>;
