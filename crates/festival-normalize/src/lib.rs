//! Field normalizers for the festival archive backend.
//!
//! The backend is inconsistent about field shapes: the same logical
//! field may arrive as a plain string, a JSON-encoded string, an array
//! of strings, an array of structured objects, or a key-value record.
//! This crate reconciles all of them into the canonical
//! [`DetailEntry`](festival_model::DetailEntry) representation:
//!
//! - **shape**: one-shot classification of a raw field
//! - **detail**: the structured-field normalizer family
//! - **description**: free-text description normalization
//!
//! Nothing here ever errors: malformed input degrades to `None`, an
//! omitted field, or a raw-string fallback.

pub mod description;
pub mod detail;
pub mod shape;

pub use description::parse_description_field;
pub use detail::{
    map_children, map_extra_details, map_item_value, map_structured_field, map_structured_item,
    parse_string_list, parse_structured_field,
};
pub use shape::{FieldShape, is_truthy, sniff};
