//! Type classification for JSON values

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Human-readable type label for a JSON value
///
/// Arrays get one extra level of description: a uniformly-typed array is
/// labelled by its element type (`"array of string"`, and recursively
/// `"array of array of integer"` for nested arrays), while arrays mixing
/// element types collapse to `"array (mixed types)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeLabel {
    Object,
    String,
    Integer,
    Number,
    Boolean,
    Null,
    /// Array with no elements
    EmptyArray,
    /// Array whose elements classify to more than one label
    MixedArray,
    /// Array whose elements all classify to the same label
    ArrayOf(Box<TypeLabel>),
    /// Placeholder label for the items slot of an empty array in a summary
    Empty,
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeLabel::Object => write!(f, "object"),
            TypeLabel::String => write!(f, "string"),
            TypeLabel::Integer => write!(f, "integer"),
            TypeLabel::Number => write!(f, "number"),
            TypeLabel::Boolean => write!(f, "boolean"),
            TypeLabel::Null => write!(f, "null"),
            TypeLabel::EmptyArray => write!(f, "array (empty)"),
            TypeLabel::MixedArray => write!(f, "array (mixed types)"),
            TypeLabel::ArrayOf(inner) => write!(f, "array of {}", inner),
            TypeLabel::Empty => write!(f, "empty"),
        }
    }
}

impl Serialize for TypeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classify a JSON value into its display type label
///
/// Object contents are not inspected; an object is `"object"` regardless of
/// what it holds. Array elements are classified recursively to decide
/// between a uniform `"array of ..."` label and `"array (mixed types)"`.
/// Booleans and numbers are distinct `Value` variants, so a boolean can
/// never come back as `"integer"`.
pub fn classify(value: &Value) -> TypeLabel {
    match value {
        Value::Object(_) => TypeLabel::Object,
        Value::Array(items) => classify_array(items),
        Value::String(_) => TypeLabel::String,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                TypeLabel::Integer
            } else {
                TypeLabel::Number
            }
        }
        Value::Bool(_) => TypeLabel::Boolean,
        Value::Null => TypeLabel::Null,
    }
}

fn classify_array(items: &[Value]) -> TypeLabel {
    let mut labels = items.iter().map(classify);

    let Some(first) = labels.next() else {
        return TypeLabel::EmptyArray;
    };

    if labels.all(|label| label == first) {
        TypeLabel::ArrayOf(Box::new(first))
    } else {
        TypeLabel::MixedArray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(classify(&json!("hello")), TypeLabel::String);
        assert_eq!(classify(&json!(42)), TypeLabel::Integer);
        assert_eq!(classify(&json!(-7)), TypeLabel::Integer);
        assert_eq!(classify(&json!(3.14)), TypeLabel::Number);
        assert_eq!(classify(&json!(true)), TypeLabel::Boolean);
        assert_eq!(classify(&json!(null)), TypeLabel::Null);
    }

    #[test]
    fn test_classify_object_ignores_contents() {
        assert_eq!(classify(&json!({})), TypeLabel::Object);
        assert_eq!(classify(&json!({"a": [1, "x"]})), TypeLabel::Object);
    }

    #[test]
    fn test_boolean_is_never_integer() {
        assert_ne!(classify(&json!(true)), TypeLabel::Integer);
        assert_ne!(classify(&json!(false)), TypeLabel::Integer);
    }

    #[test]
    fn test_fractional_literal_is_number() {
        // 2.5 has a fractional part; JSON has no way back to "integer"
        assert_eq!(classify(&json!(2.5)), TypeLabel::Number);
    }

    #[test]
    fn test_classify_empty_array() {
        assert_eq!(classify(&json!([])), TypeLabel::EmptyArray);
        assert_eq!(classify(&json!([])).to_string(), "array (empty)");
    }

    #[test]
    fn test_classify_uniform_array() {
        assert_eq!(classify(&json!(["a", "b"])).to_string(), "array of string");
        assert_eq!(classify(&json!([1, 2, 3])).to_string(), "array of integer");
        assert_eq!(
            classify(&json!([{"a": 1}, {"b": 2}])).to_string(),
            "array of object"
        );
    }

    #[test]
    fn test_classify_mixed_array() {
        assert_eq!(
            classify(&json!([1, "two"])).to_string(),
            "array (mixed types)"
        );
        // Integers and floats are distinct labels, so this is mixed too
        assert_eq!(
            classify(&json!([1, 2.5])).to_string(),
            "array (mixed types)"
        );
    }

    #[test]
    fn test_classify_nested_arrays_compose() {
        assert_eq!(
            classify(&json!([[1, 2], [3]])).to_string(),
            "array of array of integer"
        );
    }

    #[test]
    fn test_label_display_vocabulary() {
        assert_eq!(TypeLabel::Object.to_string(), "object");
        assert_eq!(TypeLabel::String.to_string(), "string");
        assert_eq!(TypeLabel::Integer.to_string(), "integer");
        assert_eq!(TypeLabel::Number.to_string(), "number");
        assert_eq!(TypeLabel::Boolean.to_string(), "boolean");
        assert_eq!(TypeLabel::Null.to_string(), "null");
        assert_eq!(TypeLabel::MixedArray.to_string(), "array (mixed types)");
        assert_eq!(TypeLabel::Empty.to_string(), "empty");
    }

    #[test]
    fn test_label_serializes_as_display_string() {
        let label = classify(&json!(["a", "b"]));
        assert_eq!(
            serde_json::to_string(&label).unwrap(),
            r#""array of string""#
        );
    }
}
