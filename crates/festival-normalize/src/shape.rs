//! Backend field shape detection.
//!
//! Every structured backend field arrives as one of a small set of
//! shapes: a JSON-encoded string, a list of structured objects, a list
//! of plain strings, or a key-value record. Classification happens here
//! once, and every normalizer dispatches on the resulting variant
//! instead of re-testing `Value` discriminants inline.

use serde_json::{Map, Value};

/// Classified shape of a raw backend field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape<'a> {
    /// Absent or `null`.
    Missing,
    /// A string; may be plain text or JSON-encoded content.
    Text(&'a str),
    /// An array whose first element is an object carrying a `text` key.
    StructuredList(&'a [Value]),
    /// An array whose first element is a string (or an empty array).
    TextList(&'a [Value]),
    /// A flat key-value record.
    Record(&'a Map<String, Value>),
    /// Anything else (numbers, booleans, arrays led by neither shape).
    Other,
}

/// Classify a backend field.
///
/// Detection only inspects the first array element: an array is
/// "already structured" if and only if its first element is an object
/// containing a `text` property, and a plain string list if and only if
/// its first element is a string. Mixed arrays are therefore
/// misclassified by whatever sits at index 0; this first-element-wins
/// policy mirrors the backend contract and is property-tested.
pub fn sniff(field: &Value) -> FieldShape<'_> {
    match field {
        Value::Null => FieldShape::Missing,
        Value::String(text) => FieldShape::Text(text),
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) if first.contains_key("text") => {
                FieldShape::StructuredList(items)
            }
            Some(Value::String(_)) | None => FieldShape::TextList(items),
            Some(_) => FieldShape::Other,
        },
        Value::Object(map) => FieldShape::Record(map),
        _ => FieldShape::Other,
    }
}

/// JavaScript-style truthiness, used when deciding whether a record
/// value is carried or dropped.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
