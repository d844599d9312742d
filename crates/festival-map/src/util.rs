//! Field-access helpers shared by the mappers.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use festival_model::Bilingual;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Borrow a field, treating absence as `null`.
pub(crate) fn field<'a>(raw: &'a Value, key: &str) -> &'a Value {
    raw.get(key).unwrap_or(&NULL)
}

/// Stringify an id that may arrive as a number or a string.
pub(crate) fn stringified(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

/// A trimmed, non-empty string field.
pub(crate) fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

/// A count field that may arrive as a number or a numeric string.
pub(crate) fn count_field(raw: &Value, key: &str) -> u64 {
    match raw.get(key) {
        Some(Value::Number(number)) => number.as_u64().unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// A year that may arrive as a number or a numeric string.
pub(crate) fn year_field(raw: &Value, key: &str) -> Option<i32> {
    let year = match raw.get(key) {
        Some(Value::Number(number)) => i32::try_from(number.as_i64()?).ok()?,
        Some(Value::String(text)) => text.trim().parse().ok()?,
        _ => return None,
    };
    plausible_year(year)
}

/// Extract the year from a date string: RFC 3339, plain `YYYY-MM-DD`,
/// or any value with a leading four-digit year (partial dates included).
pub(crate) fn year_of(date: &str) -> Option<i32> {
    let trimmed = date.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return plausible_year(datetime.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return plausible_year(date.year());
    }
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() == 4 {
        return plausible_year(digits.parse().ok()?);
    }
    None
}

fn plausible_year(year: i32) -> Option<i32> {
    (1900..=2100).contains(&year).then_some(year)
}

pub(crate) fn current_year() -> i32 {
    Utc::now().year()
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Resolve a bilingual field.
///
/// Accepts an already-canonical `{ar, en}` object, explicit `<base>Ar`
/// / `<base>En` keys, or a single-language `<base>` string. The backend
/// supplies one language only, so a missing side is populated with the
/// other as a deliberate fallback.
pub(crate) fn bilingual(raw: &Value, base: &str) -> Bilingual {
    if let Some(Value::Object(map)) = raw.get(base) {
        let ar = map.get("ar").and_then(Value::as_str).unwrap_or_default();
        let en = map.get("en").and_then(Value::as_str).unwrap_or_default();
        if !ar.is_empty() || !en.is_empty() {
            return Bilingual {
                ar: if ar.is_empty() { en } else { ar }.to_string(),
                en: if en.is_empty() { ar } else { en }.to_string(),
            };
        }
    }
    let primary = str_field(raw, base);
    let ar = str_field(raw, &format!("{base}Ar")).or_else(|| primary.clone());
    let en = str_field(raw, &format!("{base}En")).or_else(|| primary.clone());
    match (ar, en) {
        (Some(ar), Some(en)) => Bilingual { ar, en },
        (Some(only), None) | (None, Some(only)) => Bilingual::same(only),
        (None, None) => Bilingual::default(),
    }
}

/// Like [`bilingual`], but degrading to a fallback text when the
/// backend supplies nothing at all.
pub(crate) fn bilingual_or(raw: &Value, base: &str, fallback: &str) -> Bilingual {
    let resolved = bilingual(raw, base);
    if resolved.ar.is_empty() && resolved.en.is_empty() {
        Bilingual::same(fallback)
    } else {
        resolved
    }
}
