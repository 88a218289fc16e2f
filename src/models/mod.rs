//! Data models for edgar-watch
//!
//! Core abstractions:
//! - Filing: one unit of retrieved filing metadata (id, title, link, timestamp)
//! - `FilingKind`: which listing the filing came from, with source-specific fields

mod filing;

pub use filing::{Filing, FilingKind};
