//! The typed resource surface over the festival backend.

use std::sync::Arc;

use festival_client::{ApiClient, RequestBody, Result};
use festival_map::{map_article, map_comment, map_festival_edition, map_show};
use festival_model::{
    Article, ArticleKind, Comment, FestivalEdition, NewComment, ReservationRequest, Show,
};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::binding::{MutationBinding, QueryBinding};
use crate::cache::QueryCache;

/// One festival API handle: client + shared read cache. Cheap to share
/// behind an `Arc`; all methods take `&self`.
pub struct FestivalApi {
    client: ApiClient,
    cache: QueryCache,
}

impl FestivalApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: QueryCache::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run a declarative read binding. Disabled bindings resolve to
    /// `Ok(None)` without touching the network.
    pub async fn run_query<V, T>(
        &self,
        binding: &QueryBinding<V, T>,
        vars: &V,
    ) -> Result<Option<Arc<T>>>
    where
        T: Send + Sync + 'static,
    {
        if !(binding.enabled)(vars) {
            debug!("query disabled, skipping fetch");
            return Ok(None);
        }
        let key = (binding.key)(vars);
        let path = (binding.path)(vars);
        let policy = binding
            .policy
            .clone()
            .unwrap_or_else(|| self.client.config().policy.clone());
        let shape = binding.shape;
        let client = &self.client;
        let shaped = self
            .cache
            .get_or_fetch(&key, policy.stale_after, || async move {
                let raw = client
                    .get_with_policy(&path, &policy)
                    .await?
                    .unwrap_or(Value::Null);
                Ok(shape(vars, &raw))
            })
            .await?;
        Ok(Some(shaped))
    }

    /// Run a declarative write binding, dropping its cache scopes on
    /// success. Writes are never retried.
    #[instrument(skip(self, binding, vars))]
    pub async fn run_mutation<V, T>(&self, binding: &MutationBinding<V, T>, vars: &V) -> Result<T> {
        let path = (binding.path)(vars);
        let raw = self
            .client
            .post(&path, (binding.body)(vars), Some(binding.expect_status))
            .await?
            .unwrap_or(Value::Null);
        for scope in (binding.invalidates)(vars) {
            self.cache.invalidate_scope(&scope);
        }
        Ok((binding.shape)(vars, &raw))
    }

    /// Drop cache entries past the configured retention window.
    pub fn sweep_cache(&self) -> usize {
        self.cache.sweep(self.client.config().policy.retention)
    }

    // -- Festivals ---------------------------------------------------

    pub async fn festivals(&self) -> Result<Arc<Vec<FestivalEdition>>> {
        Ok(self.run_query(&FESTIVALS, &()).await?.unwrap_or_default())
    }

    pub async fn festival(&self, id: Option<&str>) -> Result<Option<Arc<FestivalEdition>>> {
        self.run_query(&FESTIVAL, &id.map(String::from)).await
    }

    // -- Shows -------------------------------------------------------

    pub async fn shows(&self) -> Result<Arc<Vec<Show>>> {
        Ok(self.run_query(&SHOWS, &()).await?.unwrap_or_default())
    }

    pub async fn show(&self, id: Option<&str>) -> Result<Option<Arc<Show>>> {
        self.run_query(&SHOW, &id.map(String::from)).await
    }

    pub async fn reserve(&self, request: &ReservationRequest) -> Result<()> {
        self.run_mutation(&RESERVE, request).await
    }

    // -- Articles (article / symposium / creativity views) -----------

    pub async fn articles(&self, kind: ArticleKind) -> Result<Arc<Vec<Article>>> {
        Ok(self.run_query(&ARTICLES, &kind).await?.unwrap_or_default())
    }

    pub async fn article(
        &self,
        id: Option<&str>,
        kind: ArticleKind,
    ) -> Result<Option<Arc<Article>>> {
        self.run_query(&ARTICLE, &(id.map(String::from), kind)).await
    }

    /// Latest `count` records of one view: pure client-side
    /// recombination of the cached collection, no separate call.
    pub async fn latest_articles(&self, kind: ArticleKind, count: usize) -> Result<Vec<Article>> {
        let all = self.articles(kind).await?;
        let mut latest: Vec<Article> = all.as_ref().clone();
        latest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        latest.truncate(count);
        Ok(latest)
    }

    // -- Comments ----------------------------------------------------

    pub async fn comments(&self, show_id: &str) -> Result<Arc<Vec<Comment>>> {
        Ok(self
            .run_query(&COMMENTS, &show_id.to_string())
            .await?
            .unwrap_or_default())
    }

    pub async fn submit_comment(&self, comment: &NewComment) -> Result<Comment> {
        self.run_mutation(&SUBMIT_COMMENT, comment).await
    }
}

/// Elements of a list response: the pagination envelope's `results`, or
/// the value itself when an endpoint answers with a bare array.
fn result_items(raw: &Value) -> &[Value] {
    match raw.get("results").unwrap_or(raw) {
        Value::Array(items) => items,
        _ => &[],
    }
}

fn required(id: &Option<String>) -> bool {
    id.as_deref().is_some_and(|id| !id.is_empty())
}

static FESTIVALS: QueryBinding<(), Vec<FestivalEdition>> = QueryBinding {
    key: |_| "festivals".to_string(),
    path: |_| "festivals".to_string(),
    enabled: |_| true,
    shape: |_, raw| result_items(raw).iter().map(map_festival_edition).collect(),
    policy: None,
};

static FESTIVAL: QueryBinding<Option<String>, FestivalEdition> = QueryBinding {
    key: |id| format!("festivals:{}", id.as_deref().unwrap_or_default()),
    path: |id| format!("festivals/{}", id.as_deref().unwrap_or_default()),
    enabled: required,
    shape: |_, raw| map_festival_edition(raw),
    policy: None,
};

static SHOWS: QueryBinding<(), Vec<Show>> = QueryBinding {
    key: |_| "shows".to_string(),
    path: |_| "shows".to_string(),
    enabled: |_| true,
    shape: |_, raw| result_items(raw).iter().map(map_show).collect(),
    policy: None,
};

static SHOW: QueryBinding<Option<String>, Show> = QueryBinding {
    key: |id| format!("shows:{}", id.as_deref().unwrap_or_default()),
    path: |id| format!("shows/{}", id.as_deref().unwrap_or_default()),
    enabled: required,
    shape: |_, raw| map_show(raw),
    policy: None,
};

static ARTICLES: QueryBinding<ArticleKind, Vec<Article>> = QueryBinding {
    key: |kind| format!("articles:{}", kind.wire_type()),
    path: |kind| format!("articles?type={}", kind.wire_type()),
    enabled: |_| true,
    shape: |kind, raw| {
        result_items(raw)
            .iter()
            .map(|item| map_article(item, *kind))
            .collect()
    },
    policy: None,
};

static ARTICLE: QueryBinding<(Option<String>, ArticleKind), Article> = QueryBinding {
    key: |(id, kind)| {
        format!(
            "articles:{}:{}",
            kind.wire_type(),
            id.as_deref().unwrap_or_default()
        )
    },
    path: |(id, _)| format!("articles/{}", id.as_deref().unwrap_or_default()),
    enabled: |(id, _)| required(id),
    shape: |(_, kind), raw| map_article(raw, *kind),
    policy: None,
};

static COMMENTS: QueryBinding<String, Vec<Comment>> = QueryBinding {
    key: |show_id| format!("comments:{show_id}"),
    path: |show_id| format!("comments?show={show_id}"),
    enabled: |show_id| !show_id.is_empty(),
    shape: |_, raw| result_items(raw).iter().map(map_comment).collect(),
    policy: None,
};

static RESERVE: MutationBinding<ReservationRequest, ()> = MutationBinding {
    path: |request| format!("shows/{}/reserve", request.show_id),
    expect_status: 201,
    // The reservation endpoint takes its field names verbatim.
    body: |request| {
        RequestBody::Verbatim(json!({
            "name": request.name,
            "email": request.email,
            "phone": request.phone,
            "seats": request.seats,
        }))
    },
    shape: |_, _| (),
    invalidates: |request| vec![format!("shows:{}", request.show_id), "shows".to_string()],
};

static SUBMIT_COMMENT: MutationBinding<NewComment, Comment> = MutationBinding {
    path: |_| "comments".to_string(),
    expect_status: 201,
    // The backend expects the bare `show` reference, not `show_id`.
    body: |comment| {
        RequestBody::Verbatim(json!({
            "show": comment.show_id,
            "content": comment.content,
            "author": comment.author,
        }))
    },
    shape: |_, raw| map_comment(raw),
    invalidates: |comment| vec![format!("comments:{}", comment.show_id)],
};
