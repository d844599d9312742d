//! Domain mappers: one pure function per resource turning a raw
//! (already camelCased) API record into its canonical type.
//!
//! Contract for all mappers: they never fail, every optional backend
//! field has an explicit default, and all derived fields (slugs, years,
//! reservation-status fallback) are computed here and nowhere else.
//! Re-mapping a mapper's own serialized output does not corrupt data.

mod article;
mod comment;
mod edition;
mod show;
mod util;

pub use article::map_article;
pub use comment::map_comment;
pub use edition::map_festival_edition;
pub use show::map_show;
