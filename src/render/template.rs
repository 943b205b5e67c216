//! Entry-type templates and placeholder substitution.
//!
//! The supported entry types form a closed enumeration, each variant carrying
//! its HTML fragment. Placeholders use the `${name}` syntax; substitution is
//! governed by an explicit [`MissingKeyPolicy`] instead of silently deciding
//! what an absent value means.

use crate::{BibError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap());

/// What to do when a template placeholder has no value in the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Keep the literal `${name}` text. Preserves partial output over total
    /// failure and is the historical behavior.
    #[default]
    LeaveUnresolved,
    /// Fail the render with [`BibError::UnresolvedPlaceholder`].
    Error,
    /// Substitute the empty string.
    SubstituteEmpty,
}

/// The closed set of recognized entry types, each with its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Article,
    Book,
    Online,
    Inproceedings,
    Incollection,
    Misc,
    Journal,
    Techreport,
}

impl EntryKind {
    /// Looks up a kind by entry type, case-folded. Unknown types yield
    /// `None`; the renderer skips them without error.
    pub fn from_type(entry_type: &str) -> Option<Self> {
        match entry_type.to_lowercase().as_str() {
            "article" => Some(EntryKind::Article),
            "book" => Some(EntryKind::Book),
            "online" => Some(EntryKind::Online),
            "inproceedings" => Some(EntryKind::Inproceedings),
            "incollection" => Some(EntryKind::Incollection),
            "misc" => Some(EntryKind::Misc),
            "journal" => Some(EntryKind::Journal),
            "techreport" => Some(EntryKind::Techreport),
            _ => None,
        }
    }

    /// The canonical type string for this kind.
    pub fn as_type(&self) -> &'static str {
        match self {
            EntryKind::Article => "article",
            EntryKind::Book => "book",
            EntryKind::Online => "online",
            EntryKind::Inproceedings => "inproceedings",
            EntryKind::Incollection => "incollection",
            EntryKind::Misc => "misc",
            EntryKind::Journal => "journal",
            EntryKind::Techreport => "techreport",
        }
    }

    /// The HTML fragment for this kind. Field placeholders expect the
    /// transformed values, which carry their own leading punctuation; the
    /// `number` placeholder is synthesized by the renderer.
    pub fn template(&self) -> &'static str {
        match self {
            EntryKind::Article => ARTICLE_TEMPLATE,
            EntryKind::Book => BOOK_TEMPLATE,
            EntryKind::Online => ONLINE_TEMPLATE,
            EntryKind::Inproceedings => INPROCEEDINGS_TEMPLATE,
            EntryKind::Incollection => INCOLLECTION_TEMPLATE,
            EntryKind::Misc => MISC_TEMPLATE,
            EntryKind::Journal => JOURNAL_TEMPLATE,
            EntryKind::Techreport => TECHREPORT_TEMPLATE,
        }
    }
}

const ARTICLE_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${journal}${volume}${pages}${year}.</div>\n  </div>\n";

const BOOK_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${publisher}${year}.</div>\n  </div>\n";

const ONLINE_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${year}. ${url}${accessed}</div>\n  </div>\n";

const INPROCEEDINGS_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${booktitle}${pages}${year}.</div>\n  </div>\n";

const INCOLLECTION_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${booktitle}${chapter}${pages}${publisher}${year}.</div>\n  </div>\n";

const MISC_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${year}. ${url}${accessed}</div>\n  </div>\n";

const JOURNAL_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${journal}${volume}${year}.</div>\n  </div>\n";

const TECHREPORT_TEMPLATE: &str = "  <div class=\"reference\">\n    <div class=\"index\">[${number}]</div>\n    <div class=\"content\">${author}${title}${publisher}${month}${year}.</div>\n  </div>\n";

/// Substitutes `${name}` placeholders in `template` from `values`, resolving
/// missing names according to `policy`.
pub(crate) fn substitute(
    template: &str,
    values: &HashMap<String, String>,
    policy: MissingKeyPolicy,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let whole = caps.get(0).unwrap();
        let name = &caps[1];
        out.push_str(&template[last..whole.start()]);
        match values.get(name) {
            Some(value) => out.push_str(value),
            None => match policy {
                MissingKeyPolicy::LeaveUnresolved => out.push_str(whole.as_str()),
                MissingKeyPolicy::Error => {
                    return Err(BibError::UnresolvedPlaceholder(whole.as_str().to_string()));
                }
                MissingKeyPolicy::SubstituteEmpty => {}
            },
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}
