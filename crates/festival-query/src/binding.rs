//! Declarative bindings tying cache keys, paths and shaping functions
//! to logical resources.

use festival_client::{RequestBody, RequestPolicy};
use serde_json::Value;

/// A read operation: resolve key/path/enablement from the variables,
/// fetch through the client, shape the raw response, cache under the
/// resolved key.
pub struct QueryBinding<V, T> {
    /// Cache key for the resolved call.
    pub key: fn(&V) -> String,
    /// Request path, possibly embedding variables.
    pub path: fn(&V) -> String,
    /// Whether the call should execute at all; a missing required
    /// variable disables the query rather than erroring.
    pub enabled: fn(&V) -> bool,
    /// Shaping function applied to the raw (camelCased) response.
    pub shape: fn(&V, &Value) -> T,
    /// Per-binding request policy (staleness window, retry bound),
    /// overriding the client-wide default when set.
    pub policy: Option<RequestPolicy>,
}

/// A write operation: resolve the path, serialize the variables into
/// exactly the wire shape the endpoint expects, post, then invalidate
/// the listed cache keys.
pub struct MutationBinding<V, T> {
    pub path: fn(&V) -> String,
    /// The one status code that counts as success for this endpoint.
    pub expect_status: u16,
    /// Custom serializer; may bypass the generic snake_case conversion
    /// for fields the backend expects verbatim.
    pub body: fn(&V) -> RequestBody,
    pub shape: fn(&V, &Value) -> T,
    /// Cache scopes to drop after a successful write. A scope covers
    /// its own key plus every key nested under a `:` separator.
    pub invalidates: fn(&V) -> Vec<String>,
}
