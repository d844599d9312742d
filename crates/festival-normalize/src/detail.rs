//! Normalization of structured detail fields.
//!
//! These functions convert an arbitrarily-shaped backend field (JSON
//! string, array of objects, array of strings, key-value record) into
//! canonical [`DetailEntry`] lists. Malformed input never escapes as an
//! error: it degrades to `None` or to a raw-string fallback, and the
//! degradation is logged at debug level.

use festival_model::{DetailEntry, TextOrList};
use serde_json::{Value, json};
use tracing::debug;

use crate::shape::{FieldShape, is_truthy, sniff};

/// Parse a structured field into its raw item list.
///
/// A JSON-encoded string is parsed and re-classified; a failed parse
/// yields `None` here (the raw-string fallback belongs to
/// [`map_structured_field`], not this function). Arrays pass through
/// with plain strings lifted to `{"text": ...}` objects; records map
/// each key-value pair to one item, dropping falsy values.
pub fn parse_structured_field(field: &Value) -> Option<Vec<Value>> {
    match sniff(field) {
        FieldShape::Missing | FieldShape::Other => None,
        FieldShape::Text(text) => {
            let parsed: Value = match serde_json::from_str(text) {
                Ok(parsed) => parsed,
                Err(error) => {
                    debug!(%error, "structured field is not JSON-encoded");
                    return None;
                }
            };
            match parsed {
                Value::Array(_) | Value::Object(_) => parse_structured_field(&parsed),
                _ => None,
            }
        }
        FieldShape::StructuredList(items) => Some(items.to_vec()),
        FieldShape::TextList(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(text) => json!({ "text": text }),
                    other => other.clone(),
                })
                .collect(),
        ),
        FieldShape::Record(map) => Some(
            map.iter()
                .map(|(key, value)| {
                    if is_truthy(value) {
                        json!({ "text": key, "value": value })
                    } else {
                        json!({ "text": key })
                    }
                })
                .collect(),
        ),
    }
}

/// Normalize a raw item value to a string or string list.
///
/// A string is JSON-parsed first: a parsed string becomes the value
/// outright, a parsed array keeps only its string elements (yielding
/// `None` when none remain), and a failed parse keeps the raw string
/// verbatim. Empty values are never carried.
pub fn map_item_value(value: &Value) -> Option<TextOrList> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(text) => {
            if text.is_empty() {
                return None;
            }
            match serde_json::from_str::<Value>(text) {
                Ok(Value::String(inner)) => {
                    (!inner.is_empty()).then_some(TextOrList::One(inner))
                }
                Ok(Value::Array(items)) => {
                    let strings = string_elements(&items);
                    (!strings.is_empty()).then_some(TextOrList::Many(strings))
                }
                // Parsed to a scalar we have no use for, or not JSON at
                // all: the raw string is the value.
                Ok(_) | Err(_) => Some(TextOrList::One(text.clone())),
            }
        }
        Value::Array(items) => {
            let strings = string_elements(items);
            (!strings.is_empty()).then_some(TextOrList::Many(strings))
        }
        Value::Number(number) => Some(TextOrList::One(number.to_string())),
        Value::Bool(flag) => Some(TextOrList::One(flag.to_string())),
    }
}

/// Validate and normalize one structured item.
///
/// Returns `None` when `text` is missing or blank after trimming; the
/// item is dropped, never an error. Optional fields are included only
/// when they carry content.
pub fn map_structured_item(item: &Value) -> Option<DetailEntry> {
    let object = item.as_object()?;
    let text = object.get("text")?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    let value = object.get("value").and_then(map_item_value);
    let children = object.get("children").and_then(map_children);
    let link = object
        .get("link")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(String::from);
    Some(DetailEntry {
        text: text.to_string(),
        value,
        children,
        link,
    })
}

/// Normalize a child list of strings and structured items.
///
/// Entries failing validation are dropped; an empty result is `None`,
/// never an empty list.
pub fn map_children(children: &Value) -> Option<Vec<DetailEntry>> {
    let items = children.as_array()?;
    let mapped: Vec<DetailEntry> = items
        .iter()
        .filter_map(|child| match child {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| DetailEntry::labeled(trimmed))
            }
            other => map_structured_item(other),
        })
        .collect();
    (!mapped.is_empty()).then_some(mapped)
}

/// Top-level entry point used by the domain mappers.
///
/// Structured shapes (including JSON-encoded ones) go through
/// [`parse_structured_field`] and [`map_structured_item`]. A plain
/// string that is not structured content becomes a single synthetic
/// entry labeled with `fallback_label`; this is how a flat `cast`
/// string of names ends up as one labeled entry under a section header.
pub fn map_structured_field(field: &Value, fallback_label: Option<&str>) -> Option<Vec<DetailEntry>> {
    if let Some(raw_items) = parse_structured_field(field) {
        let entries: Vec<DetailEntry> =
            raw_items.iter().filter_map(map_structured_item).collect();
        return (!entries.is_empty()).then_some(entries);
    }
    if field.is_string() {
        let value = map_item_value(field)?;
        return Some(vec![DetailEntry {
            text: fallback_label.unwrap_or_default().to_string(),
            value: Some(value),
            children: None,
            link: None,
        }]);
    }
    None
}

/// Normalize the extra-details field.
///
/// Unlike [`parse_structured_field`], per-item mixed shapes are
/// supported here: each element of the (possibly JSON-encoded) array is
/// independently either a plain string or a structured object. A plain
/// non-JSON string wraps as a one-element string array rather than
/// going through the detail-entry parser.
pub fn map_extra_details(extra_details: &Value) -> Option<Vec<DetailEntry>> {
    let items: Vec<Value> = match extra_details {
        Value::Array(items) => items.clone(),
        Value::String(text) => {
            if text.trim().is_empty() {
                return None;
            }
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => items,
                _ => vec![Value::String(text.clone())],
            }
        }
        _ => return None,
    };
    let entries: Vec<DetailEntry> = items
        .iter()
        .filter_map(|item| match item {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| DetailEntry::labeled(trimmed))
            }
            other => map_structured_item(other),
        })
        .collect();
    (!entries.is_empty()).then_some(entries)
}

/// Normalize a flat string-list field (e.g. the jury list).
///
/// Accepts a native array, a JSON-encoded array, or a single plain
/// string (wrapped as a one-element list). Blank entries are dropped;
/// an empty result is `None`.
pub fn parse_string_list(field: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match field {
        Value::Array(items) => string_elements(items),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => string_elements(&items),
            _ => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    vec![trimmed.to_string()]
                }
            }
        },
        _ => return None,
    };
    (!items.is_empty()).then_some(items)
}

fn string_elements(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn item_value_examples() {
        assert_eq!(
            map_item_value(&json!("\"Simple string\"")),
            Some(TextOrList::One("Simple string".to_string()))
        );
        assert_eq!(
            map_item_value(&json!("[\"A\",\"B\"]")),
            Some(TextOrList::Many(vec!["A".to_string(), "B".to_string()]))
        );
        assert_eq!(
            map_item_value(&json!("not json")),
            Some(TextOrList::One("not json".to_string()))
        );
    }

    #[test]
    fn item_value_drops_non_strings_from_parsed_arrays() {
        assert_eq!(
            map_item_value(&json!("[\"A\", 1, null, \"B\"]")),
            Some(TextOrList::Many(vec!["A".to_string(), "B".to_string()]))
        );
        assert_eq!(map_item_value(&json!("[1, 2, 3]")), None);
        assert_eq!(map_item_value(&json!("")), None);
        assert_eq!(map_item_value(&Value::Null), None);
    }

    #[test]
    fn flat_string_becomes_labeled_entry() {
        let entries = map_structured_field(&json!("John, Jane"), Some("Cast")).expect("entry");
        assert_eq!(
            entries,
            vec![DetailEntry {
                text: "Cast".to_string(),
                value: Some(TextOrList::One("John, Jane".to_string())),
                children: None,
                link: None,
            }]
        );
    }

    #[test]
    fn structured_array_passes_through_unchanged() {
        let entries =
            map_structured_field(&json!([{"text": "Director", "value": "John"}]), None)
                .expect("entries");
        assert_eq!(
            entries,
            vec![DetailEntry {
                text: "Director".to_string(),
                value: Some(TextOrList::One("John".to_string())),
                children: None,
                link: None,
            }]
        );
    }

    #[test]
    fn json_encoded_string_is_not_wrapped_by_parse_structured_field() {
        // parse_structured_field never falls back to the raw string.
        assert_eq!(parse_structured_field(&json!("just a caption")), None);
        assert_eq!(parse_structured_field(&json!("\"a quoted string\"")), None);
        // But a JSON-encoded array of strings is decoded and lifted.
        let items = parse_structured_field(&json!("[\"A\",\"B\"]")).expect("items");
        assert_eq!(items, vec![json!({"text": "A"}), json!({"text": "B"})]);
    }

    #[test]
    fn record_maps_keys_to_labeled_entries() {
        let entries = map_structured_field(
            &json!({"Director": "John", "Producer": "", "Stage": "Jane"}),
            None,
        )
        .expect("entries");
        let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["Director", "Producer", "Stage"]);
        // Falsy record values are dropped, the key label survives.
        assert_eq!(entries[1].value, None);
        assert_eq!(
            entries[0].value,
            Some(TextOrList::One("John".to_string()))
        );
    }

    #[test]
    fn blank_text_items_are_dropped() {
        assert_eq!(map_structured_item(&json!({"text": "  "})), None);
        assert_eq!(map_structured_item(&json!({"value": "x"})), None);
        assert_eq!(map_structured_item(&json!({"text": 5})), None);
        let entries = map_structured_field(
            &json!([{"text": ""}, {"text": "Kept"}, {"no_text": true}]),
            None,
        )
        .expect("entries");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Kept");
    }

    #[test]
    fn children_recurse_and_omit_empty_lists() {
        let entry = map_structured_item(&json!({
            "text": "Awards",
            "children": [
                "Best Actor",
                {"text": "Best Director", "value": "John", "link": "https://example.org/d"},
                {"text": ""},
                ""
            ]
        }))
        .expect("entry");
        let children = entry.children.expect("children");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], DetailEntry::labeled("Best Actor"));
        assert_eq!(children[1].link.as_deref(), Some("https://example.org/d"));

        let childless = map_structured_item(&json!({
            "text": "Empty",
            "children": [{"text": ""}]
        }))
        .expect("entry");
        assert_eq!(childless.children, None);
    }

    #[test]
    fn extra_details_supports_mixed_items() {
        let entries = map_extra_details(&json!([
            "Opening night",
            {"text": "Tickets", "value": "Free entry"},
            {"text": ""}
        ]))
        .expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], DetailEntry::labeled("Opening night"));
        assert_eq!(entries[1].text, "Tickets");

        // Same content JSON-encoded behaves identically.
        let encoded = json!("[\"Opening night\", {\"text\": \"Tickets\", \"value\": \"Free entry\"}]");
        let from_encoded = map_extra_details(&encoded).expect("entries");
        assert_eq!(from_encoded.len(), 2);
        assert_eq!(from_encoded[0], entries[0]);
    }

    #[test]
    fn extra_details_plain_string_wraps_as_single_label() {
        let entries = map_extra_details(&json!("A plain note")).expect("entries");
        assert_eq!(entries, vec![DetailEntry::labeled("A plain note")]);
        assert_eq!(map_extra_details(&json!("   ")), None);
        assert_eq!(map_extra_details(&Value::Null), None);
    }

    #[test]
    fn string_list_accepts_encoded_and_native_forms() {
        assert_eq!(
            parse_string_list(&json!(["Amal", " Samir "])),
            Some(vec!["Amal".to_string(), "Samir".to_string()])
        );
        assert_eq!(
            parse_string_list(&json!("[\"Amal\",\"Samir\"]")),
            Some(vec!["Amal".to_string(), "Samir".to_string()])
        );
        assert_eq!(
            parse_string_list(&json!("Amal")),
            Some(vec!["Amal".to_string()])
        );
        assert_eq!(parse_string_list(&json!([])), None);
        assert_eq!(parse_string_list(&Value::Null), None);
    }

    /// Strategy for arbitrary JSON values of modest depth.
    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[ -~]{0,20}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|map| json!(map)),
            ]
        })
    }

    proptest! {
        /// For all inputs, a produced entry never carries blank text.
        #[test]
        fn mapped_items_never_have_blank_text(value in arb_json()) {
            if let Some(entry) = map_structured_item(&value) {
                prop_assert!(!entry.text.trim().is_empty());
            }
        }

        /// A JSON-encoded array and its decoded form normalize identically.
        #[test]
        fn encoded_and_native_arrays_agree(names in prop::collection::vec("[a-zA-Z ]{1,12}", 1..6)) {
            let native = json!(names);
            let encoded = Value::String(native.to_string());
            prop_assert_eq!(
                parse_structured_field(&encoded),
                parse_structured_field(&native)
            );
        }

        /// First-element-wins: an array led by a string is always treated
        /// as a plain string list, whatever follows it.
        #[test]
        fn first_string_element_forces_text_list(
            head in "[a-zA-Z ]{1,12}",
            tail in prop::collection::vec(arb_json(), 0..4),
        ) {
            let mut items = vec![Value::String(head.clone())];
            items.extend(tail);
            let parsed = parse_structured_field(&Value::Array(items.clone())).expect("list");
            // Every string element was lifted to a labeled object; no
            // element was passed through as pre-structured content.
            prop_assert_eq!(parsed.first(), Some(&json!({"text": head.clone()})));
            for (raw, lifted) in items.iter().zip(&parsed) {
                if let Value::String(text) = raw {
                    prop_assert_eq!(lifted, &json!({"text": text.clone()}));
                }
            }
        }
    }
}
