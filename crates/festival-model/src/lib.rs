pub mod article;
pub mod comment;
pub mod detail;
pub mod edition;
pub mod lang;
pub mod page;
pub mod show;

pub use article::{Article, ArticleKind};
pub use comment::{Comment, NewComment};
pub use detail::{DetailEntry, TextOrList};
pub use edition::{Bilingual, FestivalEdition};
pub use lang::{Language, LanguageStore, language_store};
pub use page::Paginated;
pub use show::{ReservationStatus, ReservationRequest, Show};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edition_serializes_with_camel_case_keys() {
        let edition = FestivalEdition {
            id: "7".to_string(),
            slug: "7".to_string(),
            year: 2024,
            title: Bilingual::same("مهرجان المسرح"),
            description: Bilingual::same(""),
            start_date: Some("2024-03-01".to_string()),
            end_date: None,
            total_shows: 12,
            total_articles: 4,
            organizing_team: None,
            jury_list: Some(vec!["Amal".to_string()]),
            awards: None,
            extra_details: None,
        };
        let json = serde_json::to_value(&edition).expect("serialize edition");
        assert_eq!(json["totalShows"], 12);
        assert_eq!(json["startDate"], "2024-03-01");
        assert_eq!(json["juryList"][0], "Amal");
        assert!(json.get("endDate").is_none());
    }

    #[test]
    fn paginated_envelope_round_trips() {
        let raw = serde_json::json!({
            "count": 2,
            "totalPages": 1,
            "currentPage": 1,
            "results": [{"id": "1", "content": "Great", "createdAt": "2024-01-01", "showId": "9"}]
        });
        let page: Paginated<Comment> = serde_json::from_value(raw).expect("deserialize page");
        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 1);
        assert!(!page.results[0].is_approved);
    }
}
