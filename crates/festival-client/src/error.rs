//! The single error shape the rest of the system understands.

use serde_json::Value;
use thiserror::Error;

/// Failure of an API call.
///
/// Callers never see transport-level exceptions directly; everything is
/// folded into this enum. The variants are cloneable so a deduplicated
/// in-flight request can hand the same failure to several waiters.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A non-2xx response, carrying the numeric status, a best-effort
    /// human-readable message and the raw parsed payload.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        payload: Option<Value>,
    },
    /// Connection, DNS or protocol failure before a status was seen.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// True for failures worth a bounded read retry: transport errors
    /// and server-side (5xx) statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
