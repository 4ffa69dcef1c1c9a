use once_cell::sync::Lazy;
use regex::Regex;
use verba_types::VocabEntry;

use crate::gender::split_gender;

/// Trailing "(pos)" group anchored at the very end of the Latin field.
static POS_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(([^)]+)\)$").expect("valid regex"));

/// How a line encodes its part-of-speech tag.
///
/// `Parenthesized` takes precedence: `TrailingTag` applies only when the
/// trailing-parenthesis pattern is absent from the Latin field. The two
/// source formats are distinguishable by that pattern alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosNotation<'a> {
    /// "puer (noun)": tag lives in the Latin field
    Parenthesized { latin: &'a str, pos: &'a str },
    /// "I love, verb": tag after the last comma of the translation field,
    /// if the translation has one at all
    TrailingTag,
}

pub fn detect_notation(latin_raw: &str) -> PosNotation<'_> {
    if let Some(caps) = POS_PAREN.captures(latin_raw) {
        if let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) {
            return PosNotation::Parenthesized {
                latin: latin_raw[..whole.start()].trim_end(),
                pos: tag.as_str(),
            };
        }
    }
    PosNotation::TrailingTag
}

/// Parse one non-heading line into an entry.
///
/// Returns None only when the line has no " - " separator; anything else
/// yields a best-effort entry (free-text lines become translation-only).
pub fn parse_entry(line: &str) -> Option<VocabEntry> {
    // En dashes mark the same split as hyphens
    let line = line.replace('\u{2013}', "-");

    let (latin_raw, english_raw) = line.split_once(" - ")?;
    let latin_raw = latin_raw.trim();
    let english_raw = english_raw.trim();

    let (latin_field, translation, pos) = match detect_notation(latin_raw) {
        PosNotation::Parenthesized { latin, pos } => (latin, english_raw, pos),
        PosNotation::TrailingTag => match english_raw.rsplit_once(',') {
            Some((before, after)) => (latin_raw, before.trim(), after.trim()),
            None => (latin_raw, english_raw, ""),
        },
    };

    let (latin, gender) = split_gender(latin_field);

    Some(VocabEntry {
        latin,
        translation: translation.to_string(),
        pos: pos.to_string(),
        gender,
    })
}
