//! Advisory mappings from identifiers to human-readable messages.
//!
//! - `lookups` holds the built-in deprecated and cautionary tables
//! - `advisories` wraps a table with its category so the matcher can be
//!   handed any set of mappings, built-in or injected

pub mod advisories;
pub mod lookups;
