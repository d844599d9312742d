//! Normalization of free-text description fields.

use festival_model::TextOrList;
use serde_json::Value;

/// Normalize a description field to a string or string list.
///
/// - absent/`null` degrades to the empty string;
/// - a native array passes through (string elements only);
/// - a JSON-encoded string or array is decoded and returned as-is;
/// - any other string is returned verbatim.
pub fn parse_description_field(description: &Value) -> TextOrList {
    match description {
        Value::Array(items) => TextOrList::Many(string_items(items)),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::String(inner)) => TextOrList::One(inner),
            Ok(Value::Array(items)) => TextOrList::Many(string_items(&items)),
            _ => TextOrList::One(text.clone()),
        },
        _ => TextOrList::One(String::new()),
    }
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_description_is_the_empty_string() {
        assert_eq!(
            parse_description_field(&Value::Null),
            TextOrList::One(String::new())
        );
    }

    #[test]
    fn arrays_pass_through() {
        assert_eq!(
            parse_description_field(&json!(["Act one", "Act two"])),
            TextOrList::Many(vec!["Act one".to_string(), "Act two".to_string()])
        );
    }

    #[test]
    fn encoded_strings_are_decoded() {
        assert_eq!(
            parse_description_field(&json!("\"A short synopsis\"")),
            TextOrList::One("A short synopsis".to_string())
        );
        assert_eq!(
            parse_description_field(&json!("[\"Act one\",\"Act two\"]")),
            TextOrList::Many(vec!["Act one".to_string(), "Act two".to_string()])
        );
    }

    #[test]
    fn plain_text_is_kept_verbatim() {
        assert_eq!(
            parse_description_field(&json!("A play about waiting.")),
            TextOrList::One("A play about waiting.".to_string())
        );
    }
}
