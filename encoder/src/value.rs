//! FILENAME: encoder/src/value.rs
//! PURPOSE: The tagged value graph consumed by the flattening encoder.
//! CONTEXT: Input shapes are statically unknown and discovered per node at
//! traversal time. The graph is an explicit variant over the node kinds
//! (keyed record, ordered sequence, scalar leaf, nil) so traversal
//! dispatch is exhaustive and checkable.

use serde_json::Value as JsonValue;

/// The field name under which a base representation nests when a composed
/// record shape flattens into a single row (its columns appear as
/// `super.<field>`).
pub const SUPER_FIELD: &str = "super";

// ============================================================================
// SCALARS
// ============================================================================

/// A scalar leaf with a canonical text form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// The canonical text recorded into the dataset.
    /// Integral floats drop the decimal part (`2.0` renders as `2`).
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::UInt(u) => u.to_string(),
            Scalar::Float(f) => {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{:.0}", f)
                } else {
                    format!("{}", f)
                }
            }
            Scalar::Text(s) => s.clone(),
        }
    }
}

// ============================================================================
// VALUE GRAPH
// ============================================================================

/// An arbitrary nested value: the input shape the flattening encoder
/// walks. There is no depth limit; the same traversal applies uniformly
/// at every level.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An ordered set of (field-name, child) pairs.
    Keyed(Vec<(String, Value)>),
    /// An ordered list of children, indexed from zero.
    Sequence(Vec<Value>),
    /// A leaf with a text representation.
    Scalar(Scalar),
    /// An absent value; records the literal text `nil`.
    Nil,
}

impl Value {
    /// Builds a keyed record from (name, value) pairs, preserving order.
    pub fn keyed<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Keyed(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Builds an ordered sequence.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Builds a record whose base representation nests under the literal
    /// `super` field ahead of the record's own fields, so a composed or
    /// inherited shape flattens into the same row as its own fields (the
    /// base columns appear as `super.<field>`).
    pub fn keyed_with_base<K, V>(base: Value, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut pairs = vec![(SUPER_FIELD.to_string(), base)];
        pairs.extend(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        Value::Keyed(pairs)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(Scalar::Bool(v))
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Scalar(Scalar::Int(i64::from(v)))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Scalar(Scalar::Int(i64::from(v)))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(Scalar::Int(i64::from(v)))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Scalar(Scalar::Int(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Scalar(Scalar::UInt(u64::from(v)))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Scalar(Scalar::UInt(u64::from(v)))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Scalar(Scalar::UInt(u64::from(v)))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Scalar(Scalar::UInt(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(Scalar::Float(f64::from(v)))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(Scalar::Float(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(Scalar::Text(v.to_string()))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(Scalar::Text(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Nil,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for Value {
    /// Maps a JSON tree onto the value graph. Object key order is
    /// preserved, so struct fields keep their declaration order when a
    /// serializable value is routed through JSON.
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Nil,
            JsonValue::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Scalar(Scalar::UInt(u))
                } else {
                    Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(0.0)))
                }
            }
            JsonValue::String(s) => Value::Scalar(Scalar::Text(s)),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(map) => Value::Keyed(
                map.into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_canonical_text() {
        assert_eq!(Scalar::Bool(true).to_text(), "true");
        assert_eq!(Scalar::Bool(false).to_text(), "false");
        assert_eq!(Scalar::Int(-7).to_text(), "-7");
        assert_eq!(Scalar::UInt(42).to_text(), "42");
        assert_eq!(Scalar::Text("hi".to_string()).to_text(), "hi");
    }

    #[test]
    fn test_float_text_drops_integral_fraction() {
        assert_eq!(Scalar::Float(2.0).to_text(), "2");
        assert_eq!(Scalar::Float(2.5).to_text(), "2.5");
        assert_eq!(Scalar::Float(-3.0).to_text(), "-3");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(Some(5)), Value::Scalar(Scalar::Int(5)));
    }

    #[test]
    fn test_keyed_builder_preserves_order() {
        let value = Value::keyed([("zebra", 1), ("apple", 2)]);
        match value {
            Value::Keyed(pairs) => {
                assert_eq!(pairs[0].0, "zebra");
                assert_eq!(pairs[1].0, "apple");
            }
            _ => panic!("expected a keyed value"),
        }
    }

    #[test]
    fn test_keyed_with_base_prepends_super() {
        let base = Value::keyed([("name", "Mario")]);
        let value = Value::keyed_with_base(base, [("level", 3)]);
        match value {
            Value::Keyed(pairs) => {
                assert_eq!(pairs[0].0, SUPER_FIELD);
                assert_eq!(pairs[1].0, "level");
            }
            _ => panic!("expected a keyed value"),
        }
    }

    #[test]
    fn test_from_json_preserves_object_order() {
        let json = json!({"name": "Mario", "color": "red", "size": "medium"});
        match Value::from(json) {
            Value::Keyed(pairs) => {
                let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["name", "color", "size"]);
            }
            _ => panic!("expected a keyed value"),
        }
    }

    #[test]
    fn test_from_json_maps_node_kinds() {
        assert_eq!(Value::from(json!(null)), Value::Nil);
        assert_eq!(Value::from(json!(true)), Value::Scalar(Scalar::Bool(true)));
        assert_eq!(Value::from(json!(1)), Value::Scalar(Scalar::Int(1)));
        assert_eq!(Value::from(json!(1.5)), Value::Scalar(Scalar::Float(1.5)));
        assert_eq!(
            Value::from(json!("x")),
            Value::Scalar(Scalar::Text("x".to_string()))
        );
        assert_eq!(
            Value::from(json!([1, 2])),
            Value::sequence([1i64, 2i64])
        );
    }
}
