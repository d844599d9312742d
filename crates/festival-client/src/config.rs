//! Client configuration: base URL, default headers and request policy.

use std::time::Duration;

/// Environment variable carrying the API base URL. The same base also
/// resolves relative media attachment paths unless a dedicated media
/// base is configured.
pub const BASE_URL_ENV: &str = "FESTIVAL_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request behavior, overridable per call site.
#[derive(Debug, Clone)]
pub struct RequestPolicy {
    /// How long a cached read stays fresh.
    pub stale_after: Duration,
    /// How long an unused cache entry is retained before sweeping.
    pub retention: Duration,
    /// Bounded retry count for reads on transient failure. Writes are
    /// never retried automatically.
    pub retry: u32,
    pub refetch_on_focus: bool,
    pub refetch_on_reconnect: bool,
    pub refetch_on_mount: bool,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(60),
            retention: Duration::from_secs(300),
            retry: 2,
            refetch_on_focus: true,
            refetch_on_reconnect: true,
            refetch_on_mount: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Base for relative media paths; falls back to `base_url`.
    pub media_base: Option<String>,
    pub default_headers: Vec<(String, String)>,
    pub policy: RequestPolicy,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            media_base: None,
            default_headers: Vec::new(),
            policy: RequestPolicy::default(),
        }
    }

    /// Read the base URL from [`BASE_URL_ENV`], defaulting to a local
    /// backend when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve a media attachment path against the media base (or the
    /// API base when no media base is configured). Absolute URLs pass
    /// through untouched.
    pub fn media_url(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }
        let base = self.media_base.as_deref().unwrap_or(&self.base_url);
        join(base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub(crate) fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Join a base and a path with exactly one separating slash, whatever
/// either side already carries.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
