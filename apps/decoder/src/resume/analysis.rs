//! Resume analysis — turns pasted resume text into scored bullet records.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::resume::fields::{build_bullet, seed_fields, BulletFields};
use crate::resume::scoring::{improved_score, score_bullet};
use crate::text::extract::extract_bullets;
use crate::text::normalize::clean_line;
use crate::text::signals::{has_numeric_signal, leading_verb};
use crate::vocab::Vocabulary;

/// Namespace for deterministic bullet ids.
const BULLET_NAMESPACE: Uuid = Uuid::from_u128(0x6b1f_4c2e_9d3a_4e57_a0c8_52f1_7e39_b604);

/// One extracted bullet with its seeded fields and scores.
///
/// `original` and `baseline_score` are fixed at creation. `fields`, `improved` and
/// `improved_score` only ever change together, through [`BulletRecord::with_fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletRecord {
    id: Uuid,
    original: String,
    fields: BulletFields,
    baseline_score: u32,
    improved: String,
    improved_score: u32,
}

impl BulletRecord {
    pub fn new(index: usize, original: &str, vocab: &Vocabulary) -> Self {
        let id = Uuid::new_v5(&BULLET_NAMESPACE, format!("{index}:{original}").as_bytes());
        let fields = seed_fields(original, vocab);
        let improved = build_bullet(&fields);
        let improved_score = improved_score(original, &fields, vocab).total;

        Self {
            id,
            original: original.to_string(),
            fields,
            baseline_score: score_bullet(original, vocab),
            improved,
            improved_score,
        }
    }

    /// Same record with new fields; the improved text and score are recomputed with them.
    pub fn with_fields(&self, fields: BulletFields, vocab: &Vocabulary) -> Self {
        let improved = build_bullet(&fields);
        let improved_score = improved_score(&self.original, &fields, vocab).total;
        Self {
            id: self.id,
            original: self.original.clone(),
            fields,
            baseline_score: self.baseline_score,
            improved,
            improved_score,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn fields(&self) -> &BulletFields {
        &self.fields
    }

    pub fn baseline_score(&self) -> u32 {
        self.baseline_score
    }

    pub fn improved(&self) -> &str {
        &self.improved
    }

    /// Base score of the improved bullet plus bonuses. May exceed 100.
    pub fn improved_score(&self) -> u32 {
        self.improved_score
    }
}

/// Extracts every bullet from `text` and builds a record for each, in order.
pub fn analyze_resume(text: &str, vocab: &Vocabulary) -> Vec<BulletRecord> {
    let records: Vec<BulletRecord> = extract_bullets(text, vocab)
        .iter()
        .enumerate()
        .map(|(index, bullet)| BulletRecord::new(index, bullet, vocab))
        .collect();

    debug!(bullets = records.len(), "analyzed resume text");
    records
}

/// Aggregate view over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub bullet_count: usize,
    pub average_baseline: f64,
    pub average_improved: f64,
    /// Bullets whose original text already carries a number.
    pub quantified: usize,
    /// Bullets whose original text already opens with an action verb.
    pub verb_led: usize,
}

impl ResumeSummary {
    pub fn from_records(records: &[BulletRecord], vocab: &Vocabulary) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len() as f64;
        let baseline: u32 = records.iter().map(|r| r.baseline_score).sum();
        let improved: u32 = records.iter().map(|r| r.improved_score).sum();

        let quantified = records
            .iter()
            .filter(|r| has_numeric_signal(&r.original))
            .count();
        let verb_led = records
            .iter()
            .filter(|r| leading_verb(&clean_line(&r.original), vocab).is_some())
            .count();

        Self {
            bullet_count: records.len(),
            average_baseline: baseline as f64 / count,
            average_improved: improved as f64 / count,
            quantified,
            verb_led,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Experience
Harbor Bistro — Shift Lead
2019 - 2022
- Managed a team of 8 waiters
- Responsible for closing duties
- Cut food waste by 20% through weekly inventory audits";

    #[test]
    fn test_analyze_builds_one_record_per_bullet() {
        let records = analyze_resume(RESUME, &Vocabulary::builtin());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].original(), "• Managed a team of 8 waiters");
        assert_eq!(records[0].fields().verb, "Managed");
        assert_eq!(records[0].improved(), "• Managed a team of 8 waiters.");
        assert_eq!(records[0].baseline_score(), 75);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let vocab = Vocabulary::builtin();
        assert_eq!(analyze_resume(RESUME, &vocab), analyze_resume(RESUME, &vocab));
    }

    #[test]
    fn test_duplicate_bullets_get_distinct_ids() {
        let records = analyze_resume("- Led hiring\n- Led hiring", &Vocabulary::builtin());
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id(), records[1].id());
    }

    #[test]
    fn test_with_fields_recomputes_as_unit() {
        let vocab = Vocabulary::builtin();
        let record = &analyze_resume(RESUME, &vocab)[1];
        assert_eq!(record.fields().verb, "");

        let edited = BulletFields {
            verb: "Owned".into(),
            task: "closing duties for a 60-seat dining room".into(),
            impact: "by 11pm nightly".into(),
            quantifier: "60".into(),
        };
        let updated = record.with_fields(edited.clone(), &vocab);

        assert_eq!(updated.id(), record.id());
        assert_eq!(updated.original(), record.original());
        assert_eq!(updated.baseline_score(), record.baseline_score());
        assert_eq!(updated.fields(), &edited);
        assert_eq!(updated.improved(), build_bullet(&edited));
        assert_eq!(
            updated.improved_score(),
            improved_score(record.original(), &edited, &vocab).total
        );
    }

    #[test]
    fn test_summary_over_records() {
        let vocab = Vocabulary::builtin();
        let records = analyze_resume(RESUME, &vocab);
        let summary = ResumeSummary::from_records(&records, &vocab);
        assert_eq!(summary.bullet_count, 3);
        assert_eq!(summary.quantified, 2);
        assert_eq!(summary.verb_led, 2);
        assert!(summary.average_improved >= summary.average_baseline);
    }

    #[test]
    fn test_summary_of_nothing_is_zeroed() {
        let summary = ResumeSummary::from_records(&[], &Vocabulary::builtin());
        assert_eq!(summary, ResumeSummary::default());
    }
}
