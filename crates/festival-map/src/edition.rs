//! Festival edition mapping.

use festival_model::FestivalEdition;
use festival_normalize::{map_extra_details, map_structured_field, parse_string_list};
use serde_json::Value;

use crate::util::{bilingual, count_field, current_year, field, str_field, stringified, year_of};

/// Map a raw festival record to a canonical edition.
///
/// The slug is synthetic (the stringified backend id, not the year).
/// The year derives from the start date, falling back to the end date,
/// then to the current year when both are absent; each date also backs
/// the other up so a single supplied date fills both.
pub fn map_festival_edition(raw: &Value) -> FestivalEdition {
    let id = stringified(raw, "id");
    let supplied_start = str_field(raw, "startDate");
    let supplied_end = str_field(raw, "endDate");
    let start_date = supplied_start.clone().or_else(|| supplied_end.clone());
    let end_date = supplied_end.or(supplied_start);
    let year = start_date
        .as_deref()
        .and_then(year_of)
        .or_else(|| end_date.as_deref().and_then(year_of))
        .unwrap_or_else(current_year);

    FestivalEdition {
        slug: id.clone(),
        id,
        year,
        title: bilingual(raw, "title"),
        description: bilingual(raw, "description"),
        start_date,
        end_date,
        total_shows: count_field(raw, "totalShows"),
        total_articles: count_field(raw, "totalArticles"),
        organizing_team: map_structured_field(field(raw, "organizingTeam"), None),
        jury_list: parse_string_list(field(raw, "juryList")),
        awards: map_structured_field(field(raw, "awards"), None),
        extra_details: map_extra_details(field(raw, "extraDetails")),
    }
}
