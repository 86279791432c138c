// ============================================================================
// Chained Math Library
// Immutable numeric value with chainable arithmetic and coercion hooks
// ============================================================================

//! # Chained Math
//!
//! A small immutable number wrapper whose arithmetic chains.
//!
//! ## Features
//!
//! - **Chainable folds**: `add`, `minus`, `times`, `divide` over any number of operands
//! - **Seed rule**: an empty value takes its seed from the first operand
//! - **Transparent coercion**: `Display`, `From`/`Into`, `+ - * /` and comparisons with `f64`
//! - **Serde support** (default `serde` feature): serializes as a bare number
//! - **IEEE-754 semantics**: division by zero and NaN propagate, nothing panics
//!
//! ## Example
//!
//! ```rust
//! use chained_math::prelude::*;
//!
//! // Initialized: the fold starts from the wrapped value
//! let total = NumericValue::from(10).add([1, 2, 3]);
//! assert_eq!(total.value_of(), 16.0);
//!
//! // Uninitialized: the first operand is the seed
//! let seeded = NumericValue::new().add([1, 2, 3]);
//! assert_eq!(seeded.value_of(), 6.0);
//!
//! // Coercion
//! assert_eq!(total.to_string(), "16");
//! assert_eq!(total + 1.0, 17.0);
//! assert_eq!(total.to_primitive(Hint::String), Primitive::Text("16".into()));
//! ```

pub mod numeric;

pub use numeric::NumericValue;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        format_number, parse_number, Hint, NumericError, NumericResult, NumericValue, Operation,
        Primitive,
    };
}
