//! Shows and their reservation state.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::detail::{DetailEntry, TextOrList};
use crate::edition::Bilingual;

/// Reservation state of a show, as announced by the backend.
///
/// Unrecognized non-empty statuses are preserved verbatim in `Other`
/// rather than discarded; an absent status maps to `Closed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    Open,
    WaitingList,
    Complete,
    Closed,
    Other(String),
}

impl ReservationStatus {
    /// Parse a raw backend status string (case- and separator-insensitive).
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "open" => ReservationStatus::Open,
            "waiting_list" | "waitinglist" => ReservationStatus::WaitingList,
            "complete" | "completed" => ReservationStatus::Complete,
            "closed" | "" => ReservationStatus::Closed,
            _ => ReservationStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Open => "open",
            ReservationStatus::WaitingList => "waiting_list",
            ReservationStatus::Complete => "complete",
            ReservationStatus::Closed => "closed",
            ReservationStatus::Other(raw) => raw,
        }
    }

    /// True when the show still accepts reservation requests.
    pub fn is_reservable(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Open | ReservationStatus::WaitingList
        )
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Closed
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ReservationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ReservationStatus::parse(&raw))
    }
}

/// A performance in one festival edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    /// Backend-provided slug, or `show-<id>` when none was supplied.
    pub slug: String,
    pub name: Bilingual,
    pub director: String,
    pub venue_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Derived from `createdAt` or `date`; the backend supplies no
    /// edition-year field of its own.
    pub edition_year: i32,
    #[serde(default)]
    pub reservation_status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<Vec<DetailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<DetailEntry>>,
    #[serde(default)]
    pub show_description: TextOrList,
    /// Header label for the cast section when items carry no `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Show {
    /// Fallback used when the backend omits the show name.
    pub const FALLBACK_NAME: &'static str = "Untitled show";
    /// Fallback used when the backend omits the director.
    pub const FALLBACK_DIRECTOR: &'static str = "Unknown director";
    /// Fallback used when the backend omits the venue name.
    pub const FALLBACK_VENUE: &'static str = "Venue TBA";
}

/// Payload for a reservation request against `shows/{id}/reserve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub show_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_covers_separator_variants() {
        assert_eq!(ReservationStatus::parse("OPEN"), ReservationStatus::Open);
        assert_eq!(
            ReservationStatus::parse("waiting-list"),
            ReservationStatus::WaitingList
        );
        assert_eq!(
            ReservationStatus::parse("Waiting List"),
            ReservationStatus::WaitingList
        );
        assert_eq!(
            ReservationStatus::parse("completed"),
            ReservationStatus::Complete
        );
        assert_eq!(ReservationStatus::parse(""), ReservationStatus::Closed);
        assert_eq!(
            ReservationStatus::parse("sold out"),
            ReservationStatus::Other("sold out".to_string())
        );
    }

    #[test]
    fn only_open_and_waiting_list_are_reservable() {
        assert!(ReservationStatus::Open.is_reservable());
        assert!(ReservationStatus::WaitingList.is_reservable());
        assert!(!ReservationStatus::Complete.is_reservable());
        assert!(!ReservationStatus::Closed.is_reservable());
        assert!(!ReservationStatus::Other("tbd".to_string()).is_reservable());
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&ReservationStatus::WaitingList).expect("serialize");
        assert_eq!(json, "\"waiting_list\"");
        let back: ReservationStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ReservationStatus::WaitingList);
    }
}
