use regex::Regex;

use crate::types::RawReference;

/// The wikilink span pattern: shortest double-bracketed run with no closing
/// bracket inside. Unbalanced bracket text never matches and is skipped.
pub const WIKILINK_PATTERN: &str = r"\[\[([^\]]+?)\]\]";

/// Extract every `[[...]]` reference from document text, in order of first
/// appearance. Zero matches is a valid outcome, not an error.
///
/// A `|` splits target from display alias; only when no `|` is present does
/// a `#` split target from anchor. Targets are whitespace-trimmed.
pub fn wikilinks(pattern: &Regex, text: &str) -> Vec<RawReference> {
    pattern
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|span| parse_span(span.as_str())))
        .collect()
}

/// Compile the wikilink pattern once per run.
///
/// # Panics
///
/// Panics if the hardcoded reference regex is invalid (compile-time invariant).
pub fn wikilink_regex() -> Regex {
    Regex::new(WIKILINK_PATTERN).expect("valid regex")
}

/// Split one bracketed span into target, alias, and anchor.
fn parse_span(span: &str) -> RawReference {
    if let Some((target, alias)) = span.split_once('|') {
        return RawReference {
            alias: Some(alias.to_string()),
            anchor: None,
            target: target.trim().to_string(),
        };
    }
    if let Some((target, anchor)) = span.split_once('#') {
        return RawReference {
            alias: None,
            anchor: Some(anchor.to_string()),
            target: target.trim().to_string(),
        };
    }
    RawReference {
        alias: None,
        anchor: None,
        target: span.trim().to_string(),
    }
}
