//! Conversion of individual field values, and the static shapes that drive classification.

use crate::error::{DecodeError, SchemaError};
use crate::schema::Record;
use crate::shape::Shape;
use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

/// A type that can be the declared type of a record field.
///
/// Implemented for the supported scalars, for `Option`, sequences, sets, string-keyed maps,
/// and (through [`crate::record!`]) for record types. Implement it by hand to add a custom
/// scalar; its [`shape`](FieldValue::shape) should then be [`Shape::Scalar`].
pub trait FieldValue: Sized + Send + Sync + 'static {
    fn shape() -> Shape;

    fn to_value(&self) -> Result<Value, SchemaError>;

    fn from_value(value: &Value) -> Result<Self, DecodeError>;

    /// The value of a field that is absent from the input and has no default, if there is one.
    fn absent() -> Option<Self> {
        None
    }
}

/// The [`FieldValue::shape`] of a record type.
pub fn record_shape<R: Record>() -> Shape {
    Shape::record::<R>()
}

/// Encodes a record into a JSON object value.
pub fn encode_record<R: Record>(record: &R) -> Result<Value, SchemaError> {
    record.encode().map(Value::Object)
}

/// Decodes a record from a JSON value, which must be an object.
pub fn decode_record<R: Record>(value: &Value) -> Result<R, DecodeError> {
    match value {
        Value::Object(map) => R::decode(map),
        other => Err(DecodeError::invalid_type("an object", other)),
    }
}

impl FieldValue for String {
    fn shape() -> Shape {
        Shape::scalar("String")
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(Value::String(self.clone()))
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(DecodeError::invalid_type("a string", other)),
        }
    }
}

impl FieldValue for bool {
    fn shape() -> Shape {
        Shape::scalar("bool")
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(Value::Bool(*self))
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(DecodeError::coercion("bool", value)),
            },
            other => Err(DecodeError::invalid_type("a boolean", other)),
        }
    }
}

macro_rules! integer_field {
    ($($ty:ty: $as:ident),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn shape() -> Shape {
                Shape::scalar(stringify!($ty))
            }

            fn to_value(&self) -> Result<Value, SchemaError> {
                Ok(Value::from(*self))
            }

            fn from_value(value: &Value) -> Result<Self, DecodeError> {
                let coerced = match value {
                    Value::Number(n) => n.$as().and_then(|n| <$ty>::try_from(n).ok()),
                    Value::String(s) => s.trim().parse::<$ty>().ok(),
                    other => return Err(DecodeError::invalid_type("an integer", other)),
                };
                coerced.ok_or_else(|| DecodeError::coercion(stringify!($ty), value))
            }
        }
    )*};
}

integer_field!(i32: as_i64, i64: as_i64, u32: as_u64, u64: as_u64);

macro_rules! float_field {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn shape() -> Shape {
                Shape::scalar(stringify!($ty))
            }

            fn to_value(&self) -> Result<Value, SchemaError> {
                // JSON numbers cannot hold `inf` or `NaN`; the string form parses back
                Ok(Number::from_f64(f64::from(*self))
                    .map_or_else(|| Value::String(self.to_string()), Value::Number))
            }

            fn from_value(value: &Value) -> Result<Self, DecodeError> {
                let coerced = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    other => return Err(DecodeError::invalid_type("a number", other)),
                };
                coerced
                    .map(|n| n as $ty)
                    .ok_or_else(|| DecodeError::coercion(stringify!($ty), value))
            }
        }
    )*};
}

float_field!(f32, f64);

impl FieldValue for jiff::Timestamp {
    fn shape() -> Shape {
        Shape::scalar("Timestamp")
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(Value::String(self.to_string()))
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => s
                .parse()
                .map_err(|_| DecodeError::coercion("Timestamp", value)),
            other => Err(DecodeError::invalid_type("an RFC 3339 timestamp", other)),
        }
    }
}

/// Arbitrary JSON, carried through untouched.
impl FieldValue for Value {
    fn shape() -> Shape {
        Shape::scalar("Value")
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(self.clone())
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }

    fn absent() -> Option<Self> {
        Some(Value::Null)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(Value::Null),
        }
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

fn elements(value: &Value) -> Result<&Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::invalid_type("an array", other)),
    }
}

fn entries(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::invalid_type("an object", other)),
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        self.iter()
            .map(T::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        elements(value)?
            .iter()
            .enumerate()
            .map(|(i, v)| T::from_value(v).map_err(|e| e.at_index(i)))
            .collect()
    }
}

macro_rules! set_field {
    ($set:ident: $($bound:path),+) => {
        impl<T: FieldValue $(+ $bound)+> FieldValue for $set<T> {
            fn shape() -> Shape {
                Shape::set(T::shape())
            }

            fn to_value(&self) -> Result<Value, SchemaError> {
                self.iter()
                    .map(T::to_value)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }

            fn from_value(value: &Value) -> Result<Self, DecodeError> {
                elements(value)?
                    .iter()
                    .enumerate()
                    .map(|(i, v)| T::from_value(v).map_err(|e| e.at_index(i)))
                    .collect()
            }
        }
    };
}

set_field!(BTreeSet: Ord);
set_field!(HashSet: Eq, Hash);
set_field!(IndexSet: Eq, Hash);

macro_rules! mapping_field {
    ($($map:ident),+) => {$(
        impl<V: FieldValue> FieldValue for $map<String, V> {
            fn shape() -> Shape {
                Shape::mapping(V::shape())
            }

            fn to_value(&self) -> Result<Value, SchemaError> {
                self.iter()
                    .map(|(k, v)| v.to_value().map(|v| (k.clone(), v)))
                    .collect::<Result<Map<_, _>, _>>()
                    .map(Value::Object)
            }

            fn from_value(value: &Value) -> Result<Self, DecodeError> {
                entries(value)?
                    .iter()
                    .map(|(k, v)| {
                        V::from_value(v)
                            .map(|v| (k.clone(), v))
                            .map_err(|e| e.at_key(k))
                    })
                    .collect()
            }
        }
    )+};
}

mapping_field!(HashMap, BTreeMap, IndexMap);

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn err<T: FieldValue + std::fmt::Debug>(value: Value) -> String {
        T::from_value(&value).unwrap_err().to_string()
    }

    #[test]
    fn integers_accept_numeric_strings() {
        assert_eq!(u64::from_value(&json!("12345")).unwrap(), 12345);
        assert_eq!(u64::from_value(&json!(7)).unwrap(), 7);
        assert_eq!(i32::from_value(&json!(" -4 ")).unwrap(), -4);
        assert_eq!(i64::from_value(&json!(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn integers_reject_out_of_range_and_garbage() {
        assert_snapshot!(err::<u32>(json!(-1)), @"cannot decode value: cannot convert number `-1` to u32");
        assert_snapshot!(err::<i32>(json!(1u64 << 40)), @"cannot decode value: cannot convert number `1099511627776` to i32");
        assert_snapshot!(err::<u64>(json!("lots")), @r#"cannot decode value: cannot convert string "lots" to u64"#);
        assert_snapshot!(err::<u64>(json!(1.5)), @"cannot decode value: cannot convert number `1.5` to u64");
        assert_snapshot!(err::<u64>(json!([1])), @"cannot decode value: expected an integer, found an array");
    }

    #[test]
    fn floats() {
        assert_approx_eq!(f64, f64::from_value(&json!(1.0)).unwrap(), 1.0);
        assert_approx_eq!(f64, f64::from_value(&json!("2.5")).unwrap(), 2.5);
        assert_approx_eq!(f32, f32::from_value(&json!(3)).unwrap(), 3.0);
    }

    #[test]
    fn non_finite_floats_survive_a_round_trip() {
        assert_eq!(f64::INFINITY.to_value().unwrap(), json!("inf"));
        assert_eq!(f32::NEG_INFINITY.to_value().unwrap(), json!("-inf"));
        assert_eq!(f64::NAN.to_value().unwrap(), json!("NaN"));

        for n in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(f64::from_value(&n.to_value().unwrap()).unwrap(), n);
        }
        assert!(f32::from_value(&f32::NAN.to_value().unwrap()).unwrap().is_nan());
    }

    #[test]
    fn booleans_and_strings() {
        assert!(bool::from_value(&json!("true")).unwrap());
        assert!(!bool::from_value(&json!(false)).unwrap());
        assert_snapshot!(err::<bool>(json!("yes")), @r#"cannot decode value: cannot convert string "yes" to bool"#);
        assert_eq!(String::from_value(&json!(42)).unwrap(), "42");
        assert_snapshot!(err::<String>(json!({})), @"cannot decode value: expected a string, found an object");
    }

    #[test]
    fn timestamps() {
        let ts = jiff::Timestamp::from_value(&json!("2024-01-02T03:04:05Z")).unwrap();
        assert_eq!(ts.as_second(), 1_704_164_645);
        assert_eq!(ts.to_value().unwrap(), json!("2024-01-02T03:04:05Z"));
        assert_snapshot!(err::<jiff::Timestamp>(json!("yesterday")), @r#"cannot decode value: cannot convert string "yesterday" to Timestamp"#);
    }

    #[test]
    fn optional_values() {
        assert_eq!(Option::<u32>::from_value(&Value::Null).unwrap(), None);
        assert_eq!(Option::<u32>::from_value(&json!(3)).unwrap(), Some(3));
        assert_eq!(Option::<u32>::absent(), Some(None));
        assert_eq!(u32::absent(), None);
        assert_eq!(None::<u32>.to_value().unwrap(), Value::Null);
    }

    #[test]
    fn containers_keep_their_kind() {
        let v = vec![3u32, 1, 3];
        assert_eq!(v.to_value().unwrap(), json!([3, 1, 3]));

        let set = BTreeSet::<String>::from_value(&json!(["b", "a", "b"])).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), ["a", "b"]);

        let map = IndexMap::<String, u64>::from_value(&json!({"z": "1", "a": 2})).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["z", "a"]);
        assert_eq!(map.to_value().unwrap(), json!({"z": 1, "a": 2}));
    }

    #[test]
    fn container_errors_carry_their_position() {
        let e = Vec::<u64>::from_value(&json!([1, 2, "x"])).unwrap_err();
        assert_eq!(e.path(), "[2]");

        let e = HashMap::<String, bool>::from_value(&json!({"ok": true, "bad": 1})).unwrap_err();
        assert_eq!(e.path(), r#"["bad"]"#);
    }

    #[test]
    fn opaque_json_passes_through() {
        let raw = json!({"anything": [1, {"goes": null}]});
        assert_eq!(Value::from_value(&raw).unwrap(), raw);
        assert_eq!(Value::absent(), Some(Value::Null));
    }
}
