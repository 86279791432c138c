// ============================================================================
// NumericValue
// Immutable number wrapper with chainable arithmetic folds
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format::{format_number, parse_number};
use super::operation::Operation;
use std::fmt;
use std::str::FromStr;

/// An immutable wrapper around one `f64` with chainable arithmetic.
///
/// A value is either *initialized* (built from a number) or *uninitialized*
/// (built with [`NumericValue::new`], holding NaN). The distinction only
/// matters for the seed of the next fold:
///
/// - initialized: the fold starts from the wrapped value and consumes every
///   operand;
/// - uninitialized: the first operand becomes the seed and the fold consumes
///   the rest.
///
/// Every operation returns a fresh value; the receiver is never modified.
///
/// # Example
/// ```
/// use chained_math::NumericValue;
///
/// let total = NumericValue::from(10).add([1, 2, 3]).times([2]);
/// assert_eq!(total.value_of(), 32.0);
/// assert_eq!(total.to_string(), "32");
///
/// let seeded = NumericValue::new().minus([10, 4]);
/// assert_eq!(seeded.value_of(), 6.0);
/// ```
#[derive(Clone, Copy)]
pub struct NumericValue {
    value: f64,
    has_init_value: bool,
}

impl NumericValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an uninitialized value (NaN, no seed).
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: f64::NAN,
            has_init_value: false,
        }
    }

    /// Create an initialized value.
    ///
    /// An explicit NaN still counts as an initial value.
    #[inline]
    pub const fn from_value(value: f64) -> Self {
        Self {
            value,
            has_init_value: true,
        }
    }

    /// Coerce text to a value, never failing.
    ///
    /// Unparsable text yields an initialized NaN, mirroring how a script host
    /// converts an invalid string to a number.
    pub fn coerce_str(text: &str) -> Self {
        Self::from_value(parse_number(text).unwrap_or(f64::NAN))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw wrapped number.
    #[inline]
    pub const fn value_of(self) -> f64 {
        self.value
    }

    /// Whether this value was built from an explicit number.
    #[inline]
    pub const fn has_init_value(self) -> bool {
        self.has_init_value
    }

    /// Check if the wrapped number is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    // ========================================================================
    // Arithmetic Folds
    // ========================================================================

    /// Left-fold `operands` with `+`.
    pub fn add<I, T>(self, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.apply(Operation::Add, operands)
    }

    /// Left-fold `operands` with `-`.
    pub fn minus<I, T>(self, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.apply(Operation::Minus, operands)
    }

    /// Left-fold `operands` with `*`.
    pub fn times<I, T>(self, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.apply(Operation::Times, operands)
    }

    /// Left-fold `operands` with `/`.
    pub fn divide<I, T>(self, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.apply(Operation::Divide, operands)
    }

    /// Left-fold `operands` with `op`, seeding from the receiver when it is
    /// initialized and from the first operand otherwise.
    ///
    /// An uninitialized receiver with no operands has nothing to seed from;
    /// the result is another uninitialized value.
    pub fn apply<I, T>(self, op: Operation, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let mut operands = operands.into_iter().map(Into::<f64>::into);

        let seed = if self.has_init_value {
            Some(self.value)
        } else {
            operands.next()
        };

        let Some(seed) = seed else {
            tracing::trace!(
                operation = op.symbol(),
                "no seed for uninitialized value, result stays uninitialized"
            );
            return Self::new();
        };

        let mut count = 0usize;
        let value = operands.fold(seed, |running, x| {
            count += 1;
            op.apply(running, x)
        });

        tracing::trace!(
            operation = op.symbol(),
            seeded_from_receiver = self.has_init_value,
            operands = count,
            result = value,
            "folded operands"
        );

        Self::from_value(value)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for NumericValue {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_init_value {
            write!(f, "NumericValue({})", format_number(self.value))
        } else {
            write!(f, "NumericValue(<uninitialized>)")
        }
    }
}

/// String coercion: the number in script-host text form.
impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_number(self.value))
    }
}

impl FromStr for NumericValue {
    type Err = NumericError;

    /// Strict parse. Use [`NumericValue::coerce_str`] for NaN-on-failure.
    fn from_str(s: &str) -> NumericResult<Self> {
        parse_number(s)
            .map(Self::from_value)
            .ok_or(NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================
