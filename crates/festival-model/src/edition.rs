//! Festival edition: one yearly instance of the festival.

use serde::{Deserialize, Serialize};

use crate::detail::DetailEntry;
use crate::lang::Language;

/// A pair of Arabic/English renderings of one value.
///
/// The backend supplies a single language only; the mapper populates both
/// sides with the same text as a deliberate fallback, so neither side is
/// ever missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bilingual {
    pub ar: String,
    pub en: String,
}

impl Bilingual {
    /// Both sides carry the same text.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            en: text,
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}

/// One yearly edition of the festival.
///
/// Identified by a synthetic slug (the stringified backend id, not the
/// year). The `year` is derived from the start date, falling back to the
/// end date, then to the current year when both are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalEdition {
    pub id: String,
    pub slug: String,
    pub year: i32,
    pub title: Bilingual,
    pub description: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub total_shows: u64,
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizing_team: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jury_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_details: Option<Vec<DetailEntry>>,
}
