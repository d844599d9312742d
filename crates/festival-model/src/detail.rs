//! The canonical detail entry: the single recursive type every
//! heterogeneous backend "detail" field collapses into.

use serde::{Deserialize, Serialize};

/// A string value that may be a single text or an ordered list of texts.
///
/// Serialized untagged, so a single value round-trips as a plain JSON
/// string and a list as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    One(String),
    Many(Vec<String>),
}

impl TextOrList {
    /// True when there is no usable content (empty string or empty list).
    pub fn is_empty(&self) -> bool {
        match self {
            TextOrList::One(text) => text.is_empty(),
            TextOrList::Many(items) => items.is_empty(),
        }
    }

    /// All texts in order, a single value yielding a one-element slice.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            TextOrList::One(text) => vec![text.as_str()],
            TextOrList::Many(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::One(String::new())
    }
}

impl From<String> for TextOrList {
    fn from(value: String) -> Self {
        TextOrList::One(value)
    }
}

impl From<Vec<String>> for TextOrList {
    fn from(value: Vec<String>) -> Self {
        TextOrList::Many(value)
    }
}

/// A labeled structured fact (cast member, award, organizing-team role).
///
/// Invariants maintained by the normalizers:
/// - `text` is never blank;
/// - optional fields are omitted rather than carried empty (`children` is
///   never `Some(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TextOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl DetailEntry {
    /// A bare labeled entry with no value, children or link.
    pub fn labeled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: None,
            children: None,
            link: None,
        }
    }
}
