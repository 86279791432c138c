// ============================================================================
// Decimal Bridge
// Conversion to and from rust_decimal::Decimal at API boundaries
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::value::NumericValue;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

impl NumericValue {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// The result is initialized. Digits beyond `f64` precision are rounded;
    /// every `Decimal` lies well inside the `f64` range, so this cannot fail.
    pub fn from_decimal(d: Decimal) -> Self {
        NumericValue::from_value(d.to_f64().unwrap_or(f64::NAN))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `NotFinite` for NaN (including uninitialized values) and infinities
    /// - `Overflow` if the magnitude exceeds `Decimal::MAX`
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let value = self.value_of();
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Decimal::from_f64(value).ok_or(NumericError::Overflow)
    }
}

impl From<Decimal> for NumericValue {
    #[inline]
    fn from(d: Decimal) -> Self {
        NumericValue::from_decimal(d)
    }
}

impl TryFrom<NumericValue> for Decimal {
    type Error = NumericError;

    fn try_from(value: NumericValue) -> NumericResult<Self> {
        value.to_decimal()
    }
}
