//! HTTP client for the festival archive backend.
//!
//! Owns everything wire-adjacent: base-URL resolution, default
//! headers, camelCase/snake_case key translation in both directions,
//! read retry policy, and the one structured error shape
//! ([`ApiError`]) the rest of the system understands.

pub mod case;
pub mod client;
pub mod config;
pub mod error;

pub use case::{camel_case, keys_to_camel, keys_to_snake, snake_case};
pub use client::{ApiClient, RequestBody};
pub use config::{ApiConfig, BASE_URL_ENV, RequestPolicy};
pub use error::{ApiError, Result};
