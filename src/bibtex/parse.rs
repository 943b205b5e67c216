//! Line-oriented parsing of the bracketed record format.
//!
//! The grammar is deliberately small: a record opens on a line whose first
//! character is `@`, accumulates one `key = value` pair per line, and closes
//! on a line whose trimmed content is exactly `}`. Values never span lines
//! and braces never nest; malformed lines degrade to partial data instead of
//! failing. The loop is an explicit two-state machine so that behavior on
//! malformed input stays deterministic.

use crate::Entry;
use crate::bibtex::structure::RawRecord;

/// Characters stripped from both sides of a field name or value.
const FIELD_TRIM: &[char] = &[' ', '\t', '\r', '\n', '{', '}', ','];

/// Where the parser is relative to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Between records; only a record-start line is meaningful here.
    Outside,
    /// Inside a record; lines are field candidates until the terminator.
    InRecord,
}

/// Parse the content of a bibliography file, returning entries in input
/// order. Never fails: unparseable lines are skipped and an unterminated
/// trailing record is dropped.
pub(crate) fn bibtex_parse<S: AsRef<str>>(bib_text: S) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut state = ParserState::Outside;
    let mut current = RawRecord::default();

    for line in bib_text.as_ref().lines() {
        if is_record_start(line) {
            // A new start line discards any unterminated record.
            let (entry_type, identifier) = parse_record_start(line);
            current = RawRecord::open(entry_type, identifier);
            state = ParserState::InRecord;
        } else if is_record_end(line) {
            if state == ParserState::InRecord {
                entries.push(std::mem::take(&mut current).close());
                state = ParserState::Outside;
            }
        } else if state == ParserState::InRecord {
            if let Some((name, value)) = parse_field_line(line) {
                current.set_field(name, value);
            }
        }
    }

    entries
}

/// A record opens on a line whose first character is `@`.
fn is_record_start(line: &str) -> bool {
    line.starts_with('@')
}

/// A record closes on a line whose trimmed content is exactly `}`.
fn is_record_end(line: &str) -> bool {
    line.trim() == "}"
}

/// Extract `(entry_type, identifier)` from a record-start line such as
/// `@article{smith2020,`. The type is lower-cased. A start line without an
/// opening brace yields the whole remainder as the type and an empty
/// identifier.
fn parse_record_start(line: &str) -> (String, String) {
    let rest = &line[1..];
    let (entry_type, after_brace) = match rest.split_once('{') {
        Some((ty, after)) => (ty, after),
        None => (rest, ""),
    };
    let identifier = after_brace
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();
    (entry_type.trim().to_lowercase(), identifier)
}

/// Parse a candidate field line by splitting on the first `=`. Lines without
/// `=` carry no field and yield `None`. Both sides are trimmed of whitespace,
/// braces, and commas; an empty value after trimming is still a value.
fn parse_field_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once('=')?;
    Some((
        name.trim_matches(FIELD_TRIM).to_string(),
        value.trim_matches(FIELD_TRIM).to_string(),
    ))
}
