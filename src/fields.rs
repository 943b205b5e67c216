//! Base field set and entry normalization.
//!
//! Templates are flat string interpolations, so every entry must carry a
//! defined value for each field a template may reference. Normalization
//! synthesizes the missing base fields as empty strings; fields outside the
//! base set are passed through untouched.

use crate::Entry;

/// The field names every entry is guaranteed to carry after normalization.
pub const BASE_FIELDS: &[&str] = &[
    "author",
    "title",
    "url",
    "accessed",
    "year",
    "publisher",
    "pages",
    "booktitle",
    "volume",
    "journal",
    "chapter",
    "month",
];

/// Fills every entry's field map with the base field set, defaulting missing
/// names to the empty string. Existing values, including empty ones, are kept
/// as-is, so the operation is idempotent.
pub fn normalize_entries(entries: &mut [Entry]) {
    for entry in entries {
        normalize_entry(entry);
    }
}

/// Normalizes a single entry against [`BASE_FIELDS`].
pub fn normalize_entry(entry: &mut Entry) {
    for name in BASE_FIELDS {
        entry
            .fields
            .entry((*name).to_string())
            .or_insert_with(String::new);
    }
}
