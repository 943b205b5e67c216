//! Working data structure used while accumulating a record.
//!
//! A [`RawRecord`] exists only between a record-start line and its
//! terminator. When the terminator is seen the record is converted into a
//! finished [`Entry`] and the working state is reset.

use crate::Entry;
use std::collections::HashMap;

/// A record under construction: header data plus the fields seen so far.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawRecord {
    /// Lower-cased type from the record-start line.
    entry_type: String,
    /// Identifier from the record-start line.
    identifier: String,
    /// Field name to value, last write wins for duplicate names.
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Opens a record with the header extracted from a record-start line.
    pub(crate) fn open(entry_type: String, identifier: String) -> Self {
        Self {
            entry_type,
            identifier,
            fields: HashMap::new(),
        }
    }

    /// Stores a field value. Empty strings are stored too: an empty value is
    /// a value, not an absence.
    pub(crate) fn set_field(&mut self, name: String, value: String) {
        self.fields.insert(name, value);
    }

    /// Converts the accumulated record into a finished [`Entry`].
    pub(crate) fn close(self) -> Entry {
        Entry {
            identifier: self.identifier,
            entry_type: self.entry_type,
            fields: self.fields,
        }
    }
}
