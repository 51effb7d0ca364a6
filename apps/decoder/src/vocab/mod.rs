//! Vocabulary — the word tables every decoder consults.
//!
//! Verbs, resume heading noise and job-post section labels are data, not code:
//! callers may use the builtin tables or load a JSON override, and every engine
//! function takes the `Vocabulary` it should use as an argument.

pub mod tables;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::role::sections::SectionKey;

/// Heading labels that open one job-post section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLabels {
    pub key: SectionKey,
    pub labels: Vec<String>,
}

/// Raw on-disk shape. Omitted tables fall back to the builtin ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VocabularyTables {
    pub action_verbs: Vec<String>,
    pub heading_words: Vec<String>,
    pub section_labels: Vec<SectionLabels>,
}

impl Default for VocabularyTables {
    fn default() -> Self {
        Self {
            action_verbs: tables::ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            heading_words: tables::HEADING_WORDS.iter().map(|h| h.to_string()).collect(),
            section_labels: tables::SECTION_LABELS
                .iter()
                .map(|(key, labels)| SectionLabels {
                    key: *key,
                    labels: labels.iter().map(|l| l.to_string()).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VocabularyTables")]
pub struct Vocabulary {
    action_verbs: Vec<String>,
    heading_words: Vec<String>,
    section_labels: Vec<SectionLabels>,
    #[serde(skip)]
    verb_index: HashSet<String>,
    #[serde(skip)]
    heading_index: HashSet<String>,
}

impl Vocabulary {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self::from_tables(VocabularyTables::default()).expect("builtin vocabulary is valid")
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let tables: VocabularyTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn from_tables(tables: VocabularyTables) -> Result<Self, EngineError> {
        let action_verbs = normalise_words(tables.action_verbs);
        if action_verbs.is_empty() {
            return Err(EngineError::InvalidVocabulary(
                "action_verbs must contain at least one verb".to_string(),
            ));
        }
        let heading_words = normalise_words(tables.heading_words);

        let mut section_labels = Vec::with_capacity(tables.section_labels.len());
        for row in tables.section_labels {
            let labels = normalise_words(row.labels);
            if labels.is_empty() {
                return Err(EngineError::InvalidVocabulary(format!(
                    "section '{}' has no heading labels",
                    row.key.as_str()
                )));
            }
            section_labels.push(SectionLabels {
                key: row.key,
                labels,
            });
        }

        let verb_index = action_verbs.iter().cloned().collect();
        let heading_index = heading_words.iter().cloned().collect();

        Ok(Self {
            action_verbs,
            heading_words,
            section_labels,
            verb_index,
            heading_index,
        })
    }

    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    pub fn heading_words(&self) -> &[String] {
        &self.heading_words
    }

    pub fn section_labels(&self) -> &[SectionLabels] {
        &self.section_labels
    }

    /// Whole-word, case-insensitive verb lookup.
    pub fn is_action_verb(&self, word: &str) -> bool {
        self.verb_index.contains(&word.to_lowercase())
    }

    /// Exact, case-insensitive match against the resume heading list.
    pub fn is_heading(&self, text: &str) -> bool {
        self.heading_index.contains(&text.trim().to_lowercase())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<VocabularyTables> for Vocabulary {
    type Error = EngineError;

    fn try_from(tables: VocabularyTables) -> Result<Self, Self::Error> {
        Self::from_tables(tables)
    }
}

/// Trims, lowercases and de-duplicates while keeping first-seen order.
fn normalise_words(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}
