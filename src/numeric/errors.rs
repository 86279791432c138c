// ============================================================================
// Numeric Errors
// Error types for conversions at the edges of NumericValue
// ============================================================================

use std::fmt;

/// Errors raised by fallible conversions into or out of a `NumericValue`.
///
/// Arithmetic itself never fails; these only surface when parsing text,
/// bridging to `rust_decimal`, or deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a number literal
    InvalidInput,
    /// Value is NaN or infinite and has no finite representation
    NotFinite,
    /// Value lies outside the target type's range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NotFinite => {
                write!(f, "not finite: NaN and infinities have no finite form")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;
