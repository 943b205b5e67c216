//! Bracketed record format parser implementation.
//!
//! Parses the line-oriented, BibTeX-like record format:
//!
//! ```plain
//! @<type>{<identifier>,
//!   <field> = {<value>},
//!   ...
//! }
//! ```
//!
//! This is not a full BibTeX grammar: values never span lines, braces never
//! nest, and there are no string macros or cross-references. The parser is
//! tolerant by design — lines it cannot interpret are ignored rather than
//! reported.
//!
//! # Example
//!
//! ```
//! use bibhtml::BibtexParser;
//!
//! let input = r#"@article{smith2020,
//!   author = {Jane Smith},
//!   title = {An Example Article},
//! }"#;
//!
//! let entries = BibtexParser::new().parse(input);
//! assert_eq!(entries[0].field("title"), "An Example Article");
//! ```

mod parse;
mod structure;

use crate::Entry;
use parse::bibtex_parse;

/// Parser for bracketed bibliography records.
#[derive(Debug, Clone, Default)]
pub struct BibtexParser;

impl BibtexParser {
    /// Creates a new parser instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibhtml::BibtexParser;
    /// let parser = BibtexParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a string containing zero or more records, in input order.
    ///
    /// Parsing is infallible: malformed lines are skipped, an unterminated
    /// trailing record is dropped, and empty input yields an empty list.
    pub fn parse(&self, input: &str) -> Vec<Entry> {
        bibtex_parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mixed_entry_types() {
        let input = r#"@article{smith2020,
  author = {Jane Smith},
  title = {An Example Article},
  journal = {Example Letters},
  year = {2020},
}
@online{site2021,
  author = {J. Doe},
  title = {A Web Page},
  url = {http://example.com},
  accessed = {2021-05-01},
}"#;

        let parser = BibtexParser::new();
        let entries = parser.parse(input);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_type, "article");
        assert_eq!(entries[0].field("journal"), "Example Letters");
        assert_eq!(entries[1].entry_type, "online");
        assert_eq!(entries[1].field("url"), "http://example.com");
        assert_eq!(entries[1].field("accessed"), "2021-05-01");
    }

    #[test]
    fn test_parse_uppercase_type_is_folded() {
        let entries = BibtexParser::new().parse("@ARTICLE{x,\n}\n");
        assert_eq!(entries[0].entry_type, "article");
    }

    #[test]
    fn test_parse_value_trimming() {
        let input = "@misc{m,\n  title = \t{  Spaced Out  },\n}";
        let entries = BibtexParser::new().parse(input);
        assert_eq!(entries[0].field("title"), "Spaced Out");
    }
}
