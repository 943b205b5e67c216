//! A library for converting BibTeX-style bibliography records into HTML
//! reference lists.
//!
//! `bibhtml` parses a line-oriented, BibTeX-like record format into a list of
//! structured entries, normalizes each entry against a fixed base-field set,
//! and renders one numbered HTML fragment per recognized entry type. A
//! secondary pass rewrites `${identifier}` citation placeholders in an
//! existing HTML document with the computed `[N]` reference markers.
//!
//! # Key Features
//!
//! - **Tolerant line-oriented parsing**: malformed field lines are skipped,
//!   never fatal; empty input yields an empty entry list.
//! - **Uniform field sets**: every entry is normalized to carry the full base
//!   field set so template substitution always has a defined value.
//! - **Pure text transforms**: author abbreviation, URL linkification, and
//!   access-date bracketing produce a fresh value map per entry, leaving the
//!   parsed data untouched.
//! - **Closed template registry**: the supported entry types are an explicit
//!   enumeration, each carrying its HTML template.
//!
//! # Basic Usage
//!
//! ```rust
//! use bibhtml::{BibtexParser, HtmlRenderer, fields};
//!
//! let input = r#"@article{smith2020,
//!   author = {Jane Smith},
//!   title = {An Example Article},
//!   year = {2020},
//! }"#;
//!
//! let mut entries = BibtexParser::new().parse(input);
//! fields::normalize_entries(&mut entries);
//!
//! let html = HtmlRenderer::new().render(&entries).unwrap();
//! assert!(html.contains("An Example Article"));
//! ```
//!
//! The same pipeline is available as a one-call convenience:
//!
//! ```rust
//! let html = bibhtml::convert("").unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! # Citation Rewriting
//!
//! ```rust
//! use bibhtml::{BibtexParser, cite};
//!
//! let entries = BibtexParser::new().parse("@book{doe1999,\n}\n");
//! let doc = cite::rewrite_citations("As shown in ${doe1999}.", &entries);
//! assert_eq!(doc, "As shown in [1].\n");
//! ```
//!
//! # Error Handling
//!
//! Parsing never fails: unknown entry types are skipped at render time and
//! unresolved template placeholders are left verbatim by default. The
//! [`Result`] type wraps [`BibError`] for the failures that do exist — I/O
//! and the opt-in [`MissingKeyPolicy::Error`] rendering policy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub mod bibtex;
pub mod cite;
pub mod fields;
pub mod render;
pub mod transform;

// Reexports
pub use bibtex::BibtexParser;
pub use render::{HtmlRenderer, MissingKeyPolicy};

/// A specialized Result type for bibliography operations.
pub type Result<T> = std::result::Result<T, BibError>;

/// Represents errors that can occur while converting a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unresolved template placeholder: {0}")]
    UnresolvedPlaceholder(String),
}

/// Represents one bibliographic reference.
///
/// An `Entry` is produced by the parser, filled to the base field set by
/// [`fields::normalize_entries`], and read (never mutated) by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique key used for cross-referencing; compared case-insensitively.
    pub identifier: String,
    /// Lower-cased entry type, selects which template applies.
    pub entry_type: String,
    /// Field name to raw value. After normalization this contains every name
    /// in the base field set, possibly with empty values.
    pub fields: HashMap<String, String>,
}

impl Entry {
    /// Returns the raw value for `name`, or the empty string when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Case-insensitive identifier comparison used by citation lookups.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.identifier.eq_ignore_ascii_case(identifier)
    }
}

/// Runs the whole pipeline with default settings: parse, normalize, render.
pub fn convert(input: &str) -> Result<String> {
    let mut entries = BibtexParser::new().parse(input);
    fields::normalize_entries(&mut entries);
    HtmlRenderer::new().render(&entries)
}
