//! Section Parser — splits a job post into labelled sections by heading lines.
//!
//! Single pass over the non-empty lines. A line whose stripped, lowercased text
//! starts with a known label closes the current section and opens a new one;
//! every other line is appended to the current section. Heading lines carry the
//! section's `heading` and are not repeated in its `lines`; a heading with no body
//! lines produces no section.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::vocab::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Purpose,
    Responsibilities,
    Qualifications,
    Requirements,
    Skills,
    General,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Purpose => "purpose",
            SectionKey::Responsibilities => "responsibilities",
            SectionKey::Qualifications => "qualifications",
            SectionKey::Requirements => "requirements",
            SectionKey::Skills => "skills",
            SectionKey::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSection {
    pub key: SectionKey,
    pub heading: String,
    pub lines: Vec<String>,
}

impl ParsedSection {
    fn general() -> Self {
        Self {
            key: SectionKey::General,
            heading: String::new(),
            lines: Vec::new(),
        }
    }

    /// Body lines, newline-separated. The heading is not included.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobPost {
    pub sections: Vec<ParsedSection>,
    /// The input exactly as given.
    pub text: String,
}

impl ParsedJobPost {
    /// First section with `key`, if any.
    pub fn section(&self, key: SectionKey) -> Option<&ParsedSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Every section line, in input order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
    }
}

/// Bullets, hashes, quote markers and "1." / "(2)" numbering ahead of a heading.
static HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•*·#>]|\(?\d+[.)]|\s)+").expect("valid regex"));

pub fn parse_sections(input: &str, vocab: &Vocabulary) -> ParsedJobPost {
    let mut sections = Vec::new();
    let mut current = ParsedSection::general();

    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match match_heading(line, vocab) {
            Some((key, label)) => {
                let next = ParsedSection {
                    key,
                    heading: heading_text(line, label),
                    lines: Vec::new(),
                };
                let finished = std::mem::replace(&mut current, next);
                if !finished.lines.is_empty() {
                    sections.push(finished);
                }
            }
            None => current.lines.push(line.to_string()),
        }
    }

    if !current.lines.is_empty() {
        sections.push(current);
    }

    if sections.is_empty() {
        // No section kept any body lines: keep every line under `general`.
        // Blank input still yields this one (empty) section.
        let mut general = ParsedSection::general();
        general.lines = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        sections.push(general);
    }

    ParsedJobPost {
        sections,
        text: input.to_string(),
    }
}

/// First `(key, label)` in table order whose label opens the stripped line.
fn match_heading<'v>(line: &str, vocab: &'v Vocabulary) -> Option<(SectionKey, &'v str)> {
    let probe = HEADING_PREFIX.replace(line, "").to_lowercase();
    vocab.section_labels().iter().find_map(|row| {
        row.labels
            .iter()
            .find(|label| probe.starts_with(label.as_str()))
            .map(|label| (row.key, label.as_str()))
    })
}

fn heading_text(line: &str, label: &str) -> String {
    let stripped = HEADING_PREFIX.replace(line, "");
    let cleaned = stripped.trim().trim_end_matches(':').trim_end();
    if cleaned.is_empty() {
        title_case(label)
    } else {
        title_case(cleaned)
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
