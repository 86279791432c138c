// ============================================================================
// Numeric Module
// Immutable number wrapper with chainable arithmetic and coercion hooks
// ============================================================================
//
// This module provides:
// - NumericValue: the wrapper, its seed rule and the four folds
// - Operation: the fold steps (add, minus, times, divide)
// - Hint/Primitive: context-driven coercion to number or text
// - format_number/parse_number: host-style number text
// - NumericError: errors for fallible conversions
//
// Design principles:
// - Values are Copy and never mutated; every operation returns a new value
// - Arithmetic follows IEEE-754 and never fails (NaN/inf propagate)
// - Only boundary conversions (text, decimal, serde) return Result

mod coercion;
mod decimal;
mod errors;
mod format;
mod operation;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

pub use coercion::{Hint, Primitive};
pub use errors::{NumericError, NumericResult};
pub use format::{format_number, parse_number};
pub use operation::Operation;
pub use value::NumericValue;
