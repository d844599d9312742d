//! Tests for article mapping across its three views.

use festival_map::map_article;
use festival_model::ArticleKind;
use serde_json::json;

#[test]
fn slug_prefix_follows_the_view() {
    let raw = json!({"id": 8, "createdAt": "2024-01-01"});
    assert_eq!(map_article(&raw, ArticleKind::Article).slug, "article-8");
    assert_eq!(map_article(&raw, ArticleKind::Symposium).slug, "article-8");
    assert_eq!(map_article(&raw, ArticleKind::Creativity).slug, "creativity-8");

    let with_slug = json!({"id": 8, "slug": "on-stagecraft", "createdAt": "2024-01-01"});
    assert_eq!(
        map_article(&with_slug, ArticleKind::Article).slug,
        "on-stagecraft"
    );
}

#[test]
fn edition_year_prefers_the_explicit_festival_year() {
    let explicit = map_article(
        &json!({"id": 1, "festivalYear": 2022, "createdAt": "2024-01-01"}),
        ArticleKind::Article,
    );
    assert_eq!(explicit.edition_year, 2022);

    let derived = map_article(
        &json!({"id": 1, "createdAt": "2024-06-01T00:00:00+00:00"}),
        ArticleKind::Article,
    );
    assert_eq!(derived.edition_year, 2024);
}

#[test]
fn sections_are_trimmed_and_compacted() {
    let article = map_article(
        &json!({
            "id": 2,
            "createdAt": "2024-01-01",
            "sectionOne": "  First part  ",
            "sectionTwo": "   ",
            "sectionThree": "Closing part"
        }),
        ArticleKind::Symposium,
    );
    assert_eq!(
        article.sections,
        vec!["First part".to_string(), "Closing part".to_string()]
    );
}

#[test]
fn attachments_keep_only_non_empty_paths() {
    let article = map_article(
        &json!({
            "id": 3,
            "createdAt": "2024-01-01",
            "attachments": ["/media/a.pdf", "", "  ", "/media/b.jpg"]
        }),
        ArticleKind::Creativity,
    );
    assert_eq!(
        article.attachments,
        vec!["/media/a.pdf".to_string(), "/media/b.jpg".to_string()]
    );

    let none = map_article(&json!({"id": 3, "createdAt": "2024-01-01"}), ArticleKind::Article);
    assert!(none.attachments.is_empty());
}

#[test]
fn mapping_is_idempotent_over_its_own_output() {
    let raw = json!({
        "id": 9,
        "title": "ندوة عن المسرح",
        "author": "Huda",
        "festivalYear": 2023,
        "createdAt": "2023-04-01T10:00:00+00:00",
        "sectionOne": "Opening",
        "sectionTwo": "Discussion",
        "attachments": ["/media/papers/9.pdf"]
    });
    let once = map_article(&raw, ArticleKind::Symposium);
    let round = serde_json::to_value(&once).expect("serialize article");
    let twice = map_article(&round, ArticleKind::Symposium);
    assert_eq!(once, twice);
}
