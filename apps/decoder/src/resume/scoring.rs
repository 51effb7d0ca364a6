//! Bullet scoring — a 0–100 heuristic quality score plus edit-incentive bonuses.
//!
//! The base score is clamped; the bonuses are added on top of the improved
//! bullet's base score without a second clamp, so an improved total can exceed 100.

use serde::{Deserialize, Serialize};

use crate::resume::fields::{build_bullet, BulletFields};
use crate::text::normalize::{clean_line, normalize_line};
use crate::text::signals::{
    has_by_or_to, has_numeric_signal, has_outcome_connector, has_verb, leading_verb, word_count,
};
use crate::vocab::Vocabulary;

const VERB_POINTS: u32 = 30;
const LEADING_VERB_POINTS: u32 = 10;
const NUMBER_POINTS: u32 = 35;
const CLARITY_POINTS: u32 = 10;
const STRUCTURE_POINTS: u32 = 15;

const CLARITY_WORDS: std::ops::RangeInclusive<usize> = 8..=32;

const FIELD_PRESENT_BONUS: u32 = 5;

const INTRODUCED_LEADING_VERB_BONUS: u32 = 4;
const INTRODUCED_QUANTIFIER_BONUS: u32 = 4;
const INTRODUCED_IMPACT_BONUS: u32 = 3;
const REWRITE_BONUS: u32 = 2;
const INTRODUCED_ANY_VERB_BONUS: u32 = 2;

/// Which heuristics fired for a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub has_verb: bool,
    pub has_leading_verb: bool,
    pub has_number: bool,
    pub clarity: bool,
    pub structure: bool,
}

impl SignalBreakdown {
    pub fn score(&self) -> u32 {
        let points = [
            (self.has_verb, VERB_POINTS),
            (self.has_leading_verb, LEADING_VERB_POINTS),
            (self.has_number, NUMBER_POINTS),
            (self.clarity, CLARITY_POINTS),
            (self.structure, STRUCTURE_POINTS),
        ]
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, pts)| pts)
        .sum::<u32>();
        points.min(100)
    }
}

/// Runs every heuristic on the normalised, lowercased bullet.
pub fn analyze_signals(bullet: &str, vocab: &Vocabulary) -> SignalBreakdown {
    let text = normalize_line(bullet, vocab).to_lowercase();
    if text.is_empty() {
        return SignalBreakdown::default();
    }

    SignalBreakdown {
        has_verb: has_verb(&text, vocab),
        has_leading_verb: leading_verb(&text, vocab).is_some(),
        has_number: has_numeric_signal(&text),
        clarity: CLARITY_WORDS.contains(&word_count(&text)),
        structure: has_outcome_connector(&text),
    }
}

/// Heuristic quality score in `[0, 100]`. Empty or noise text scores 0.
pub fn score_bullet(bullet: &str, vocab: &Vocabulary) -> u32 {
    analyze_signals(bullet, vocab).score()
}

/// Presentation tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalTier {
    High,
    Moderate,
    Hidden,
}

impl SignalTier {
    pub fn label(&self) -> &'static str {
        match self {
            SignalTier::High => "High signal",
            SignalTier::Moderate => "Moderate",
            SignalTier::Hidden => "Hidden value",
        }
    }

    /// Accent token for the caller's styling layer.
    pub fn accent(&self) -> &'static str {
        match self {
            SignalTier::High => "success",
            SignalTier::Moderate => "warning",
            SignalTier::Hidden => "muted",
        }
    }
}

pub fn score_label(score: u32) -> SignalTier {
    match score {
        s if s >= 80 => SignalTier::High,
        s if s >= 50 => SignalTier::Moderate,
        _ => SignalTier::Hidden,
    }
}

/// +5 for each of verb, quantifier and impact that is filled in.
pub fn field_bonus(fields: &BulletFields) -> u32 {
    [&fields.verb, &fields.quantifier, &fields.impact]
        .iter()
        .filter(|f| !f.trim().is_empty())
        .count() as u32
        * FIELD_PRESENT_BONUS
}

/// Rewards structure the edited fields introduce that the original lacked.
pub fn edit_bonus(original: &str, fields: &BulletFields, vocab: &Vocabulary) -> u32 {
    let original = normalize_line(original, vocab);

    let verb_set = !fields.verb.trim().is_empty();
    let quantifier_set = !fields.quantifier.trim().is_empty();
    let impact_set = !fields.impact.trim().is_empty();

    let mut bonus = 0;
    if verb_set && leading_verb(&original, vocab).is_none() {
        bonus += INTRODUCED_LEADING_VERB_BONUS;
    }
    if quantifier_set && !has_numeric_signal(&original) {
        bonus += INTRODUCED_QUANTIFIER_BONUS;
    }
    if impact_set && !has_by_or_to(&original) {
        bonus += INTRODUCED_IMPACT_BONUS;
    }
    if comparable(&build_bullet(fields)) != comparable(&original) {
        bonus += REWRITE_BONUS;
    }
    if verb_set && !has_verb(&original, vocab) {
        bonus += INTRODUCED_ANY_VERB_BONUS;
    }
    bonus
}

/// Bullet text with marker and terminal punctuation removed, for edit detection.
fn comparable(text: &str) -> String {
    clean_line(text)
        .trim_end_matches(['.', '!', '?'])
        .trim_end()
        .to_string()
}

/// Score of an edited bullet, broken into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovedScore {
    pub base: u32,
    pub field_bonus: u32,
    pub edit_bonus: u32,
    /// Not clamped.
    pub total: u32,
}

pub fn improved_score(original: &str, fields: &BulletFields, vocab: &Vocabulary) -> ImprovedScore {
    let base = score_bullet(&build_bullet(fields), vocab);
    let field_bonus = field_bonus(fields);
    let edit_bonus = edit_bonus(original, fields, vocab);
    ImprovedScore {
        base,
        field_bonus,
        edit_bonus,
        total: base + field_bonus + edit_bonus,
    }
}
