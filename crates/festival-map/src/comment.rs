//! Comment mapping.

use festival_model::Comment;
use serde_json::Value;

use crate::util::{now_rfc3339, str_field, stringified};

/// Map a raw comment record to its canonical form.
///
/// `createdAt` defaults to now and `isApproved` to false; the show id
/// may arrive under `showId` or as a bare `show` reference.
pub fn map_comment(raw: &Value) -> Comment {
    let show_id = {
        let direct = stringified(raw, "showId");
        if direct.is_empty() {
            stringified(raw, "show")
        } else {
            direct
        }
    };
    Comment {
        id: stringified(raw, "id"),
        content: raw
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        author: str_field(raw, "author"),
        created_at: str_field(raw, "createdAt").unwrap_or_else(now_rfc3339),
        show_id,
        is_approved: raw
            .get("isApproved")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}
