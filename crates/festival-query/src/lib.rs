//! Query and mutation layer over the festival API.
//!
//! Reads go through declarative [`QueryBinding`]s resolved against a
//! shared [`QueryCache`]: fresh results are served from memory and
//! concurrent fetches of one key collapse into a single request.
//! Writes go through [`MutationBinding`]s and invalidate the cache
//! keys they affect. [`FestivalApi`] is the typed front door.

mod api;
mod binding;
mod cache;

pub use api::FestivalApi;
pub use binding::{MutationBinding, QueryBinding};
pub use cache::QueryCache;
