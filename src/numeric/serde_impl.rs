// ============================================================================
// Serde Integration
// NumericValue serializes as a bare number, never as a nested object
// ============================================================================
//
// Human-readable encoding (JSON and similar):
// - integral values within the exactly-representable range -> integer
// - other finite values -> float
// - NaN / infinities -> null (JSON has no literal for them)
//
// Compact encoding (binary formats): always an `Option<f64>`, finite values
// as `Some`, so formats that are not self-describing decode what they wrote.
//
// Decoding reads an `Option<f64>` in both cases: a number gives an
// initialized value, null an uninitialized one. `has_init_value` is never
// written.

use super::value::NumericValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Integers up to 2^53 are exact in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

enum Encoded {
    Integer(i64),
    Float(f64),
    Null,
}

fn encode(value: f64) -> Encoded {
    if !value.is_finite() {
        Encoded::Null
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // `as` is exact here; -0 becomes 0
        Encoded::Integer(value as i64)
    } else {
        Encoded::Float(value)
    }
}

/// Shape written for serializers that are not human readable.
fn compact(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Serialize for NumericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return compact(self.value_of()).serialize(serializer);
        }
        match encode(self.value_of()) {
            Encoded::Integer(i) => serializer.serialize_i64(i),
            Encoded::Float(f) => serializer.serialize_f64(f),
            Encoded::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NumericValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(NumericValue::from)
    }
}

impl NumericValue {
    /// The JSON form of this value: the raw number, or `null` when not finite.
    pub fn to_json(self) -> serde_json::Value {
        match encode(self.value_of()) {
            Encoded::Integer(i) => serde_json::Value::from(i),
            Encoded::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Encoded::Null => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct Invoice {
        label: String,
        total: NumericValue,
    }

    #[test]
    fn test_serialize_as_bare_number() {
        let invoice = Invoice {
            label: "a".to_string(),
            total: NumericValue::from(10).add([1, 2, 3]),
        };
        assert_eq!(
            serde_json::to_string(&invoice).unwrap(),
            r#"{"label":"a","total":16}"#
        );
    }

    #[test]
    fn test_serialize_fraction_and_non_finite() {
        assert_eq!(
            serde_json::to_string(&NumericValue::from(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(serde_json::to_string(&NumericValue::new()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&NumericValue::from(1.0).divide([0])).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&NumericValue::from(-0.0)).unwrap(),
            "0"
        );
    }

    #[test]
    fn test_to_json() {
        assert_eq!(NumericValue::from(5).to_json(), json!(5));
        assert_eq!(NumericValue::from(0.25).to_json(), json!(0.25));
        assert_eq!(NumericValue::new().to_json(), serde_json::Value::Null);
        assert_eq!(
            json!({ "x": NumericValue::from(7).to_json() }),
            json!({ "x": 7 })
        );
    }

    #[test]
    fn test_deserialize() {
        let v: NumericValue = serde_json::from_str("42").unwrap();
        assert_eq!(v.value_of(), 42.0);
        assert!(v.has_init_value());

        let v: NumericValue = serde_json::from_str("-1.5").unwrap();
        assert_eq!(v.value_of(), -1.5);

        let empty: NumericValue = serde_json::from_str("null").unwrap();
        assert!(!empty.has_init_value());

        let invoice: Invoice = serde_json::from_str(r#"{"label":"b","total":3}"#).unwrap();
        assert_eq!(invoice.label, "b");
        assert_eq!(invoice.total.add([1]).value_of(), 4.0);
    }

    #[test]
    fn test_compact_form_matches_decoded_shape() {
        assert_eq!(compact(16.0), Some(16.0));
        assert_eq!(compact(-0.5), Some(-0.5));
        assert_eq!(compact(f64::NAN), None);
        assert_eq!(compact(f64::NEG_INFINITY), None);

        // Decoding reads `Option<f64>`, the exact type compact encoding writes
        for value in [NumericValue::from(3), NumericValue::from(0.1), NumericValue::new()] {
            let decoded = NumericValue::from(compact(value.value_of()));
            assert_eq!(decoded.has_init_value(), value.has_init_value());
            if value.has_init_value() {
                assert_eq!(decoded, value);
            }
        }
    }

    #[test]
    fn test_human_readable_serializer_keeps_json_shape() {
        let value = serde_json::to_value(NumericValue::from(16)).unwrap();
        assert_eq!(value, json!(16));
        assert!(value.is_u64());
    }

    #[test]
    fn test_deserialize_rejects_text() {
        let result: Result<NumericValue, _> = serde_json::from_str(r#""5""#);
        assert!(result.is_err());
    }
}
