//! Slug construction and record resolution

mod record;
mod slug;

pub use record::{JsonRecord, SlugBehavior, SlugRecord};
pub use slug::{DISALLOWED_CHARS, SEPARATOR, build_slug, create_base_slug, extract_identifier};
