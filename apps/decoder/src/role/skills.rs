//! Skill Dictionary Matcher — keyword-driven skill detection with confidence scoring.
//!
//! Matching is case-insensitive substring counting, deterministic, and needs no model.
//! Confidence is deliberately generous: matching half of an entry's keywords
//! (distinct) already reaches 1.0.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDictionaryEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Skill key → entry. Ordered by key so detection output is reproducible.
/// An empty dictionary is valid and detects nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, SkillDictionaryEntry>",
    into = "BTreeMap<String, SkillDictionaryEntry>"
)]
pub struct SkillDictionary {
    entries: BTreeMap<String, SkillDictionaryEntry>,
}

impl SkillDictionary {
    /// Builds a dictionary, defaulting empty ids and labels to the entry key.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, SkillDictionaryEntry)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, mut entry)| {
                if entry.id.trim().is_empty() {
                    entry.id = key.clone();
                }
                if entry.label.trim().is_empty() {
                    entry.label = key.clone();
                }
                (key, entry)
            })
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let raw: BTreeMap<String, SkillDictionaryEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SkillDictionaryEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SkillDictionaryEntry)> {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, SkillDictionaryEntry>> for SkillDictionary {
    fn from(raw: BTreeMap<String, SkillDictionaryEntry>) -> Self {
        Self::from_entries(raw)
    }
}

impl From<SkillDictionary> for BTreeMap<String, SkillDictionaryEntry> {
    fn from(dictionary: SkillDictionary) -> Self {
        dictionary.entries
    }
}

/// A dictionary entry found in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSkill {
    pub key: String,
    pub id: String,
    pub label: String,
    /// One element per occurrence, in detection order.
    pub matches: Vec<String>,
    pub frequency: u32,
    /// Heuristic strength in `[0, 1]`.
    pub confidence: f64,
}

/// Scans `text` for every dictionary entry's keywords.
///
/// Algorithm:
/// 1. Lowercase the text once.
/// 2. For each non-empty trimmed keyword, count non-overlapping occurrences,
///    recording the keyword once per occurrence.
/// 3. Entries with no occurrence are skipped.
/// 4. confidence = min(1, distinct matched keywords / max(1, keyword count / 2))
/// 5. Sort by frequency desc, then confidence desc; remaining ties keep key order.
pub fn detect_skills(text: &str, dictionary: &SkillDictionary) -> Vec<DetectedSkill> {
    let haystack = text.to_lowercase();

    let mut detected: Vec<DetectedSkill> = dictionary
        .iter()
        .filter_map(|(key, entry)| detect_entry(&haystack, key, entry))
        .collect();

    detected.sort_by(|a, b| {
        b.frequency.cmp(&a.frequency).then_with(|| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    detected
}

fn detect_entry(haystack: &str, key: &str, entry: &SkillDictionaryEntry) -> Option<DetectedSkill> {
    let mut matches = Vec::new();
    let mut distinct = HashSet::new();

    for keyword in &entry.keywords {
        let keyword = keyword.trim();
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            continue;
        }

        let hits = haystack.matches(needle.as_str()).count();
        if hits > 0 {
            distinct.insert(needle);
            matches.extend(std::iter::repeat(keyword.to_string()).take(hits));
        }
    }

    if matches.is_empty() {
        return None;
    }

    let half_list = (entry.keywords.len() as f64 / 2.0).max(1.0);
    let confidence = (distinct.len() as f64 / half_list).min(1.0);

    Some(DetectedSkill {
        key: key.to_string(),
        id: entry.id.clone(),
        label: entry.label.clone(),
        frequency: matches.len() as u32,
        matches,
        confidence,
    })
}
