//! Line cleanup shared by the resume and role decoders.

use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::Vocabulary;

pub const BULLET_PREFIX: &str = "• ";

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    // Last, so "&amp;lt;" decodes to "&lt;" and not "<".
    ("&amp;", "&"),
];

static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-•*]\s*").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// `MONTH YEAR` or `YEAR`, optionally followed by a dash and a second such token,
/// or by "current"/"present".
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let month = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?";
    let stamp = format!(r"(?:{month}\s+)?\d{{4}}");
    Regex::new(&format!(
        r"(?i)^{stamp}(?:\s*[-–—]\s*(?:{stamp}|current|present))?$"
    ))
    .expect("valid regex")
});

/// Minimum number of alphanumeric characters for a line to carry content.
const MIN_ALNUM: usize = 3;

/// Decodes the small fixed set of HTML entities that leak in from pasted text.
pub fn decode_entities(raw: &str) -> String {
    ENTITIES
        .iter()
        .fold(raw.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// Entity decoding, marker stripping and whitespace collapsing, without any
/// noise filtering. Never empties a line that has content.
pub fn clean_line(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let unmarked = LEADING_MARKER.replace(&decoded, "");
    collapse_whitespace(&unmarked)
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Cleans a line and returns an empty string when it is noise: a bare resume
/// heading, a date range, or fewer than three alphanumeric characters.
pub fn normalize_line(raw: &str, vocab: &Vocabulary) -> String {
    let cleaned = clean_line(raw);

    if is_noise(&cleaned, vocab) {
        return String::new();
    }
    cleaned
}

/// `normalize_line`, re-prefixed with `• ` when anything survives.
pub fn normalize_text_line(raw: &str, vocab: &Vocabulary) -> String {
    let line = normalize_line(raw, vocab);
    if line.is_empty() {
        line
    } else {
        format!("{BULLET_PREFIX}{line}")
    }
}

fn is_noise(cleaned: &str, vocab: &Vocabulary) -> bool {
    vocab.is_heading(cleaned)
        || DATE_RANGE.is_match(cleaned)
        || cleaned.chars().filter(|c| c.is_alphanumeric()).count() < MIN_ALNUM
}
