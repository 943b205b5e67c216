//! Citation rewriting: replaces `${identifier}` placeholders in an external
//! document with `[N]` reference markers.
//!
//! The number is the 1-based position of the first case-insensitive
//! identifier match in the entry list — list position, not render number, so
//! the lookup works even for entries whose type has no template. Unmatched
//! placeholders are left verbatim. All occurrences on a line are rewritten.
//!
//! # Example
//!
//! ```
//! use bibhtml::{BibtexParser, cite};
//!
//! let entries = BibtexParser::new().parse(
//!     "@article{smith2020,\n}\n@article{jones2019,\n}\n",
//! );
//! let doc = cite::rewrite_citations("See ${jones2019} for details.", &entries);
//! assert_eq!(doc, "See [2] for details.\n");
//! ```

use crate::Entry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Returns the 1-based list position of the first entry whose identifier
/// matches `identifier` case-insensitively.
pub fn reference_number(entries: &[Entry], identifier: &str) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.matches_identifier(identifier))
        .map(|index| index + 1)
}

/// Rewrites every `${identifier}` placeholder in `document`, line by line.
/// Each line of the output is newline-terminated, including the last.
pub fn rewrite_citations(document: &str, entries: &[Entry]) -> String {
    let mut out = String::with_capacity(document.len());
    for line in document.lines() {
        let rewritten = CITATION_REGEX.replace_all(line, |caps: &Captures| {
            match reference_number(entries, &caps[1]) {
                Some(number) => format!("[{number}]"),
                // No matching entry: keep the placeholder as-is.
                None => caps[0].to_string(),
            }
        });
        out.push_str(&rewritten);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(identifier: &str) -> Entry {
        Entry {
            identifier: identifier.to_string(),
            entry_type: "article".to_string(),
            ..Entry::default()
        }
    }

    #[test]
    fn test_reference_number_is_list_position() {
        let entries = vec![entry("smith2020"), entry("jones2019")];
        assert_eq!(reference_number(&entries, "smith2020"), Some(1));
        assert_eq!(reference_number(&entries, "jones2019"), Some(2));
        assert_eq!(reference_number(&entries, "missing"), None);
    }

    #[test]
    fn test_reference_number_first_match_wins() {
        let entries = vec![entry("dup"), entry("dup")];
        assert_eq!(reference_number(&entries, "dup"), Some(1));
    }

    #[test]
    fn test_rewrite_single_placeholder() {
        let entries = vec![entry("smith2020"), entry("jones2019")];
        let doc = rewrite_citations("See ${jones2019} for details.", &entries);
        assert_eq!(doc, "See [2] for details.\n");
    }

    #[test]
    fn test_rewrite_is_case_insensitive() {
        let entries = vec![entry("Smith2020")];
        let doc = rewrite_citations("${smith2020}", &entries);
        assert_eq!(doc, "[1]\n");
    }

    #[test]
    fn test_rewrite_all_occurrences_on_one_line() {
        let entries = vec![entry("a"), entry("b")];
        let doc = rewrite_citations("${a} and ${b} and ${a}", &entries);
        assert_eq!(doc, "[1] and [2] and [1]\n");
    }

    #[test]
    fn test_unmatched_placeholder_is_left_verbatim() {
        let entries = vec![entry("known")];
        let doc = rewrite_citations("cites ${unknown} and ${known}", &entries);
        assert_eq!(doc, "cites ${unknown} and [1]\n");
    }

    #[test]
    fn test_every_line_is_newline_terminated() {
        let entries = vec![entry("a")];
        let doc = rewrite_citations("first ${a}\nsecond", &entries);
        assert_eq!(doc, "first [1]\nsecond\n");
    }

    #[test]
    fn test_rewrite_empty_document() {
        assert_eq!(rewrite_citations("", &[]), "");
    }

    #[test]
    fn test_lines_without_placeholders_pass_through() {
        let html = "<p>No citations here.</p>";
        assert_eq!(rewrite_citations(html, &[]), format!("{html}\n"));
    }
}
