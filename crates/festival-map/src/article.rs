//! Article mapping, shared by the article, symposium and creativity
//! views of the same backend record.

use festival_model::{Article, ArticleKind};
use festival_normalize::parse_string_list;
use serde_json::Value;

use crate::util::{
    bilingual, current_year, field, now_rfc3339, str_field, stringified, year_field, year_of,
};

/// Map a raw article record to its canonical form under the given view.
///
/// The edition year prefers the explicit festival-year field over the
/// creation date. A missing slug derives as `<prefix>-<id>` with the
/// prefix decided by the view.
pub fn map_article(raw: &Value, kind: ArticleKind) -> Article {
    let id = stringified(raw, "id");
    let created_at = str_field(raw, "createdAt").unwrap_or_else(now_rfc3339);
    let edition_year = year_field(raw, "festivalYear")
        .or_else(|| year_field(raw, "editionYear"))
        .or_else(|| year_of(&created_at))
        .unwrap_or_else(current_year);

    Article {
        slug: str_field(raw, "slug")
            .unwrap_or_else(|| format!("{}-{id}", kind.slug_prefix())),
        kind,
        title: bilingual(raw, "title"),
        author: str_field(raw, "author"),
        edition_year,
        created_at,
        sections: sections(raw),
        attachments: parse_string_list(field(raw, "attachments")).unwrap_or_default(),
        id,
    }
}

/// The three ordered optional body fields, trimmed and compacted. An
/// already-canonical `sections` array is accepted as-is.
fn sections(raw: &Value) -> Vec<String> {
    if let Some(Value::Array(items)) = raw.get("sections") {
        return items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from)
            .collect();
    }
    ["sectionOne", "sectionTwo", "sectionThree"]
        .iter()
        .filter_map(|key| str_field(raw, key))
        .collect()
}
