//! Pure per-field text transforms applied at render time.
//!
//! Templates carry no conditional logic, so all presence branching happens
//! here: a field renders either as the empty string (nothing) or as a fully
//! punctuated fragment that reads naturally after the preceding template
//! segment. Transforms never mutate the entry; [`transform_entry`] builds a
//! fresh value map, so rendering the same entry twice cannot double-apply a
//! prefix.

use crate::Entry;
use itertools::Itertools;
use std::collections::HashMap;

/// Builds the substitution map for one entry by running each field through
/// its transform. The entry itself is left untouched.
pub fn transform_entry(entry: &Entry) -> HashMap<String, String> {
    let author = format_authors(entry.field("author"));
    let mut values = HashMap::with_capacity(entry.fields.len() + 1);

    for (name, value) in &entry.fields {
        let rendered = match name.as_str() {
            "author" => author.clone(),
            "title" => format_title(value, !author.is_empty()),
            "accessed" => format_accessed(value),
            "url" => format_url(value),
            _ => format_generic(value),
        };
        values.insert(name.clone(), rendered);
    }

    values
}

/// Formats an author list for the reference line.
///
/// A value without whitespace is treated as a single already-formatted name
/// and passed through unchanged. Otherwise the value is split on the literal
/// substring `and` — delimiter-sensitive, so a surname containing `and` is
/// split too (known limitation) — and each component is abbreviated to
/// `initial. Surname`, with a lower-cased leading token of `others` rendered
/// as `et al`. Components are joined with `", "`.
pub fn format_authors(raw: &str) -> String {
    if !raw.chars().any(char::is_whitespace) {
        return raw.to_string();
    }
    raw.split("and").map(format_author_component).join(", ")
}

/// Abbreviates one author component: first initial of the first token plus
/// the final token as surname. Middle given names are dropped.
fn format_author_component(component: &str) -> String {
    let tokens: Vec<&str> = component.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return String::new();
    };
    if first.to_lowercase() == "others" {
        return "et al".to_string();
    }
    let last = tokens.last().unwrap_or(first);
    match first.chars().next() {
        Some(initial) => format!("{initial}. {last}"),
        None => String::new(),
    }
}

/// Strips literal braces from a title and, when the entry has a rendered
/// author, prefixes `", "` so the title flows after the author list.
pub fn format_title(raw: &str, has_author: bool) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '{' && *c != '}').collect();
    if has_author {
        format!(", {stripped}")
    } else {
        stripped
    }
}

/// Wraps a non-empty access date as `[Accessed: date]`.
pub fn format_accessed(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        format!("[Accessed: {raw}]")
    }
}

/// Renders a non-empty URL as an `Available:` link with the URL as both the
/// target and the visible text. A value still carrying the `url` field-name
/// prefix (an artifact of loose field-line parsing) has its first three
/// characters dropped before use.
pub fn format_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let url = if raw.contains("url") {
        raw.get(3..).unwrap_or("")
    } else {
        raw
    };
    format!("Available: <a href=\"{url}\">{url}</a> ")
}

/// Prefixes any other non-empty field with `", "`; empty values stay empty so
/// templates render no stray punctuation.
pub fn format_generic(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        format!(", {raw}")
    }
}
