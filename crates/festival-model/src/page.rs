//! Pagination envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            total_pages: 0,
            current_page: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}
