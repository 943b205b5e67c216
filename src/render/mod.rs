//! HTML rendering of an entry list.
//!
//! The renderer walks the entries in order, selects a template per entry
//! type, substitutes the transformed field values plus the synthesized
//! `number` placeholder, and concatenates the fragments between a static
//! header and footer. Entries with an unrecognized type are skipped silently
//! and do not consume a reference number.
//!
//! # Example
//!
//! ```
//! use bibhtml::{BibtexParser, HtmlRenderer, fields};
//!
//! let mut entries = BibtexParser::new().parse("@book{doe1999,\n  title = {A Book},\n}\n");
//! fields::normalize_entries(&mut entries);
//!
//! let html = HtmlRenderer::new().render(&entries).unwrap();
//! assert!(html.contains("[1]"));
//! assert!(html.contains("A Book"));
//! ```

mod template;

use crate::transform::transform_entry;
use crate::{Entry, Result};

pub use template::{EntryKind, MissingKeyPolicy};

/// Static document header with the two-column flex layout for references.
const HTML_HEADER: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>References</title>\n<style>\n.reference {\n  display: flex;\n  flex-direction: row;\n  margin-bottom: 0.5em;\n}\n.reference .index {\n  flex: 0 0 3em;\n}\n.reference .content {\n  flex: 1;\n}\n</style>\n</head>\n<body>\n";

/// Static document footer.
const HTML_FOOTER: &str = "</body>\n</html>\n";

/// Renders a normalized entry list into one HTML document string.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    policy: MissingKeyPolicy,
}

impl HtmlRenderer {
    /// Creates a renderer with the default tolerant placeholder policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with an explicit [`MissingKeyPolicy`].
    #[must_use]
    pub fn with_policy(policy: MissingKeyPolicy) -> Self {
        Self { policy }
    }

    /// Renders the entries in order, numbering recognized entries from 1.
    ///
    /// Output is deterministic for a given entry list; the entries are not
    /// mutated, so rendering twice yields identical strings.
    ///
    /// # Errors
    ///
    /// Fails only under [`MissingKeyPolicy::Error`] when a template
    /// placeholder has no value.
    pub fn render(&self, entries: &[Entry]) -> Result<String> {
        let mut html = String::from(HTML_HEADER);
        let mut number = 1usize;

        for entry in entries {
            let Some(kind) = EntryKind::from_type(&entry.entry_type) else {
                // Unrecognized type: skipped, no number consumed.
                continue;
            };
            let mut values = transform_entry(entry);
            values.insert("number".to_string(), number.to_string());
            html.push_str(&template::substitute(kind.template(), &values, self.policy)?);
            number += 1;
        }

        html.push_str(HTML_FOOTER);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BibtexParser, fields};
    use pretty_assertions::assert_eq;

    fn parse_and_normalize(input: &str) -> Vec<Entry> {
        let mut entries = BibtexParser::new().parse(input);
        fields::normalize_entries(&mut entries);
        entries
    }

    #[test]
    fn test_render_empty_list_is_header_plus_footer() {
        let html = HtmlRenderer::new().render(&[]).unwrap();
        assert_eq!(html, format!("{HTML_HEADER}{HTML_FOOTER}"));
    }

    #[test]
    fn test_render_numbers_entries_sequentially() {
        let entries = parse_and_normalize(
            r#"@article{a,
  author = {Jane Smith},
  title = {First},
  journal = {Letters},
  year = {2020},
}
@book{b,
  author = {John Doe},
  title = {Second},
  publisher = {Pub House},
  year = {1999},
}"#,
        );

        let html = HtmlRenderer::new().render(&entries).unwrap();
        assert!(html.contains("[1]"));
        assert!(html.contains("[2]"));
        assert!(html.contains("J. Smith, First, Letters, 2020."));
        assert!(html.contains("J. Doe, Second, Pub House, 1999."));
    }

    #[test]
    fn test_unknown_type_is_skipped_without_consuming_a_number() {
        let entries = parse_and_normalize(
            r#"@conference{skipme,
  title = {Ignored},
}
@article{kept,
  title = {Kept},
  journal = {J},
}"#,
        );

        let html = HtmlRenderer::new().render(&entries).unwrap();
        assert!(!html.contains("Ignored"));
        assert!(html.contains("[1]"));
        assert!(!html.contains("[2]"));
    }

    #[test]
    fn test_render_is_idempotent_on_numbering() {
        let entries = parse_and_normalize(
            "@article{a,\n  title = {T},\n}\n@online{b,\n  url = {http://example.com},\n}\n",
        );

        let renderer = HtmlRenderer::new();
        let first = renderer.render(&entries).unwrap();
        let second = renderer.render(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_online_entry_links_url() {
        let entries = parse_and_normalize(
            r#"@online{site,
  author = {Jane Smith},
  title = {A Page},
  url = {http://example.com},
  accessed = {2021-05-01},
}"#,
        );

        let html = HtmlRenderer::new().render(&entries).unwrap();
        assert!(
            html.contains("Available: <a href=\"http://example.com\">http://example.com</a> ")
        );
        assert!(html.contains("[Accessed: 2021-05-01]"));
    }

    #[test]
    fn test_unnormalized_entry_leaves_placeholder_by_default() {
        // Skip normalization on purpose: the article template references
        // fields the record never set.
        let entries = BibtexParser::new().parse("@article{a,\n  title = {T},\n}\n");

        let html = HtmlRenderer::new().render(&entries).unwrap();
        assert!(html.contains("${journal}"));
    }

    #[test]
    fn test_error_policy_fails_on_missing_value() {
        let entries = BibtexParser::new().parse("@article{a,\n  title = {T},\n}\n");

        let result = HtmlRenderer::with_policy(MissingKeyPolicy::Error).render(&entries);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_empty_policy_drops_missing_values() {
        let entries = BibtexParser::new().parse("@article{a,\n  title = {T},\n}\n");

        let html = HtmlRenderer::with_policy(MissingKeyPolicy::SubstituteEmpty)
            .render(&entries)
            .unwrap();
        assert!(!html.contains("${"));
        assert!(html.contains("T."));
    }
}
