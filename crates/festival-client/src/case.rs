//! Bidirectional key-case translation.
//!
//! The backend speaks snake_case; the canonical model speaks camelCase.
//! The client is the sole translation boundary: outbound JSON bodies go
//! through [`keys_to_snake`], inbound responses through [`keys_to_camel`].
//! Only object keys are rewritten; values pass through untouched.

use serde_json::{Map, Value};

/// Convert one snake_case key to camelCase.
pub fn camel_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// Convert one camelCase key to snake_case.
pub fn snake_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !result.is_empty() {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Recursively rewrite every object key to camelCase.
pub fn keys_to_camel(value: &Value) -> Value {
    transform_keys(value, &camel_case)
}

/// Recursively rewrite every object key to snake_case.
pub fn keys_to_snake(value: &Value) -> Value {
    transform_keys(value, &snake_case)
}

fn transform_keys(value: &Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, inner)| (convert(key), transform_keys(inner, convert)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|inner| transform_keys(inner, convert))
                .collect(),
        ),
        other => other.clone(),
    }
}
