//! Show mapping.

use festival_model::{ReservationStatus, Show};
use festival_normalize::{map_structured_field, parse_description_field};
use serde_json::Value;

use crate::util::{bilingual_or, current_year, field, str_field, stringified, year_of};

/// Map a raw show record to its canonical form.
///
/// The edition year comes from `createdAt`, falling back to `date`; the
/// backend supplies no edition-year field of its own, so one never
/// enters the derivation. A missing slug derives as `show-<id>`.
pub fn map_show(raw: &Value) -> Show {
    let id = stringified(raw, "id");
    let created_at = str_field(raw, "createdAt");
    let date = str_field(raw, "date");
    let edition_year = created_at
        .as_deref()
        .and_then(year_of)
        .or_else(|| date.as_deref().and_then(year_of))
        .unwrap_or_else(current_year);
    let cast_word = str_field(raw, "castWord");

    Show {
        slug: str_field(raw, "slug").unwrap_or_else(|| format!("show-{id}")),
        name: bilingual_or(raw, "name", Show::FALLBACK_NAME),
        director: str_field(raw, "director")
            .unwrap_or_else(|| Show::FALLBACK_DIRECTOR.to_string()),
        venue_name: str_field(raw, "venueName")
            .unwrap_or_else(|| Show::FALLBACK_VENUE.to_string()),
        date,
        created_at,
        edition_year,
        reservation_status: reservation_status(raw),
        cast: map_structured_field(field(raw, "cast"), cast_word.as_deref()),
        crew: map_structured_field(field(raw, "crew"), None),
        notes: map_structured_field(field(raw, "notes"), None),
        show_description: parse_description_field(field(raw, "showDescription")),
        cast_word,
        poster: str_field(raw, "poster"),
        id,
    }
}

fn reservation_status(raw: &Value) -> ReservationStatus {
    let status = str_field(raw, "reservationStatus").or_else(|| str_field(raw, "status"));
    match status {
        Some(status) => ReservationStatus::parse(&status),
        None => ReservationStatus::Closed,
    }
}
