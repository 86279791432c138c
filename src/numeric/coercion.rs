// ============================================================================
// Coercion
// Conversions between NumericValue and plain Rust numbers / text
// ============================================================================
//
// A NumericValue behaves like its raw number wherever a number is expected:
// - `From` impls build initialized values from lossless primitives
// - `+ - * /` against `f64` (or another NumericValue) yield a plain `f64`
// - comparisons against `f64` use float semantics (NaN is unequal to all)
// - `to_primitive` picks text or number by context hint

use super::format::format_number;
use super::value::NumericValue;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Context in which a value is coerced to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hint {
    /// Text is expected (interpolation, string conversion)
    String,
    /// A number is expected (arithmetic)
    Number,
    /// No preference (comparison, `+` with an unknown operand)
    #[default]
    Default,
}

/// Result of a primitive coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number(f64),
    Text(String),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(n) => f.write_str(&format_number(*n)),
            Primitive::Text(s) => f.write_str(s),
        }
    }
}

impl NumericValue {
    /// Coerce to a primitive for the given context.
    ///
    /// `Hint::String` yields the text form; any other hint yields the raw number.
    pub fn to_primitive(self, hint: Hint) -> Primitive {
        match hint {
            Hint::String => Primitive::Text(self.to_string()),
            Hint::Number | Hint::Default => Primitive::Number(self.value_of()),
        }
    }
}

// ============================================================================
// Construction from primitives
// ============================================================================

macro_rules! impl_from_lossless {
    ($($From:ty),* $(,)?) => {
        $(
            impl From<$From> for NumericValue {
                #[inline]
                fn from(value: $From) -> Self {
                    NumericValue::from_value(f64::from(value))
                }
            }
        )*
    };
}

impl_from_lossless!(f64, f32, i8, i16, i32, u8, u16, u32);

/// `None` stands for a missing initial value.
impl From<Option<f64>> for NumericValue {
    #[inline]
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(NumericValue::new, NumericValue::from_value)
    }
}

impl From<NumericValue> for f64 {
    #[inline]
    fn from(value: NumericValue) -> Self {
        value.value_of()
    }
}

// ============================================================================
// Arithmetic with plain numbers
// ============================================================================

macro_rules! impl_coercing_op {
    ($($Trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl $Trait<f64> for NumericValue {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: f64) -> f64 {
                    self.value_of() $op rhs
                }
            }

            impl $Trait<NumericValue> for f64 {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: NumericValue) -> f64 {
                    self $op rhs.value_of()
                }
            }

            impl $Trait for NumericValue {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: NumericValue) -> f64 {
                    self.value_of() $op rhs.value_of()
                }
            }
        )*
    };
}

impl_coercing_op! {
    Add, add, +;
    Sub, sub, -;
    Mul, mul, *;
    Div, div, /;
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for NumericValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value_of() == other.value_of()
    }
}

impl PartialOrd for NumericValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value_of().partial_cmp(&other.value_of())
    }
}

impl PartialEq<f64> for NumericValue {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value_of() == *other
    }
}

impl PartialEq<NumericValue> for f64 {
    #[inline]
    fn eq(&self, other: &NumericValue) -> bool {
        *self == other.value_of()
    }
}

impl PartialOrd<f64> for NumericValue {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value_of().partial_cmp(other)
    }
}

impl PartialOrd<NumericValue> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &NumericValue) -> Option<Ordering> {
        self.partial_cmp(&other.value_of())
    }
}
