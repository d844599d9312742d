//! Articles, symposia and creativity submissions.
//!
//! All three are views over the same backend "article" record,
//! distinguished only by the `type` query parameter sent to the API and
//! by the slug prefix applied when the backend supplies none.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::edition::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleKind {
    #[serde(rename = "ARTICLE")]
    Article,
    #[serde(rename = "SYMPOSIA")]
    Symposium,
    #[serde(rename = "CREATIVITY")]
    Creativity,
}

impl ArticleKind {
    /// The `type` query-parameter value the backend expects.
    pub fn wire_type(&self) -> &'static str {
        match self {
            ArticleKind::Article => "ARTICLE",
            ArticleKind::Symposium => "SYMPOSIA",
            ArticleKind::Creativity => "CREATIVITY",
        }
    }

    /// Prefix for the derived slug when the backend supplies none.
    pub fn slug_prefix(&self) -> &'static str {
        match self {
            ArticleKind::Creativity => "creativity",
            _ => "article",
        }
    }
}

impl fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_type())
    }
}

impl FromStr for ArticleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARTICLE" | "ARTICLES" => Ok(ArticleKind::Article),
            "SYMPOSIA" | "SYMPOSIUM" => Ok(ArticleKind::Symposium),
            "CREATIVITY" => Ok(ArticleKind::Creativity),
            other => Err(format!("Unknown article kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    /// Backend slug, or `<prefix>-<id>` when none was supplied.
    pub slug: String,
    pub kind: ArticleKind,
    pub title: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// From the explicit festival-year field, else the creation date.
    pub edition_year: i32,
    pub created_at: String,
    /// Up to three ordered body sections, trimmed, empties removed.
    #[serde(default)]
    pub sections: Vec<String>,
    /// Relative media paths; blanks are never carried.
    #[serde(default)]
    pub attachments: Vec<String>,
}
