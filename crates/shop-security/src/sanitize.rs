//! Free-text sanitising applied before anything user-supplied is stored.
//!
//! Tags and stray angle brackets are removed rather than entity-encoded so the
//! operation is idempotent: re-saving an already clean value changes nothing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Only `<` followed by a letter, `/` or `!` opens a tag; `<10cm` is text.
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)</?[A-Za-z!][^>]*>").expect("valid tag regex"));

pub fn sanitize_text(input: &str) -> String {
    let without_tags = TAG.replace_all(input, "");
    without_tags
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}
