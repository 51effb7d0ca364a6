//! Field seeding — decomposes a bullet into verb / task / impact / quantifier,
//! and rebuilds a bullet from those fields.

use serde::{Deserialize, Serialize};

use crate::text::normalize::{clean_line, collapse_whitespace, BULLET_PREFIX};
use crate::text::signals::{capitalize_first, first_quantifier, first_verb, leading_verb};
use crate::vocab::Vocabulary;

/// Split points between the task and its outcome, in the remainder of the line.
const OUTCOME_MARKERS: &[&str] = &[" by ", " to "];

/// Words that already connect a task to its impact.
const IMPACT_CONNECTORS: &[&str] = &["to", "by"];

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// The editable parts of a bullet. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletFields {
    pub verb: String,
    pub task: String,
    pub impact: String,
    pub quantifier: String,
}

impl BulletFields {
    pub fn is_empty(&self) -> bool {
        [&self.verb, &self.task, &self.impact, &self.quantifier]
            .iter()
            .all(|f| f.trim().is_empty())
    }
}

/// Decomposes a bullet line into fields.
///
/// 1. Clean the line (entities, leading marker, whitespace).
/// 2. Verb: a vocabulary verb opening the line, else the left-most one anywhere.
/// 3. Remove that verb; split the remainder at the earlier of " by " / " to ".
///    Before the split is the task, from the split onward is the impact.
/// 4. Quantifier: first number (with optional `%`) in the cleaned line.
pub fn seed_fields(text: &str, vocab: &Vocabulary) -> BulletFields {
    let cleaned = clean_line(text);
    if cleaned.is_empty() {
        return BulletFields::default();
    }

    let verb_match = leading_verb(&cleaned, vocab).or_else(|| first_verb(&cleaned, vocab));

    let (verb, remainder) = match verb_match {
        Some(m) => {
            let without_verb = format!("{} {}", &cleaned[..m.span.start], &cleaned[m.span.end..]);
            (capitalize_first(&m.word), collapse_whitespace(&without_verb))
        }
        None => (String::new(), cleaned.clone()),
    };

    let (task, impact) = split_outcome(&remainder);
    let quantifier = first_quantifier(&cleaned).unwrap_or_default().to_string();

    BulletFields {
        verb,
        task,
        impact,
        quantifier,
    }
}

/// Splits at the first outcome marker. ASCII lowercasing keeps byte offsets aligned.
fn split_outcome(remainder: &str) -> (String, String) {
    let lower = remainder.to_ascii_lowercase();
    let split_at = OUTCOME_MARKERS
        .iter()
        .filter_map(|marker| lower.find(marker))
        .min();

    match split_at {
        Some(idx) => (
            remainder[..idx].trim().to_string(),
            remainder[idx..].trim().to_string(),
        ),
        None => (remainder.trim().to_string(), String::new()),
    }
}

/// Rebuilds a `• `-prefixed bullet from its fields.
///
/// Pure in `fields`: verb and task form the statement, the impact follows (with a
/// " to " connector unless it already opens with "to"/"by"), and the quantifier is
/// appended in parentheses unless the statement already contains it verbatim.
/// All-empty fields build an empty string.
pub fn build_bullet(fields: &BulletFields) -> String {
    let verb = capitalize_first(fields.verb.trim());
    let task = fields.task.trim();

    let mut statement = [verb.as_str(), task]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let impact = fields.impact.trim();
    if !impact.is_empty() {
        if opens_with_connector(impact) {
            statement.push(' ');
        } else {
            statement.push_str(" to ");
        }
        statement.push_str(impact);
    }

    let quantifier = fields.quantifier.trim();
    if !quantifier.is_empty() && !statement.contains(quantifier) {
        statement.push_str(&format!(" ({quantifier})"));
    }

    let mut statement = collapse_whitespace(&statement);
    if statement.is_empty() {
        return statement;
    }
    if !statement.ends_with(TERMINAL_PUNCTUATION) {
        statement.push('.');
    }
    format!("{BULLET_PREFIX}{statement}")
}

fn opens_with_connector(impact: &str) -> bool {
    impact
        .split_whitespace()
        .next()
        .map(|word| {
            IMPACT_CONNECTORS
                .iter()
                .any(|c| word.eq_ignore_ascii_case(c))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize::normalize_line;

    fn fields(verb: &str, task: &str, impact: &str, quantifier: &str) -> BulletFields {
        BulletFields {
            verb: verb.to_string(),
            task: task.to_string(),
            impact: impact.to_string(),
            quantifier: quantifier.to_string(),
        }
    }

    #[test]
    fn test_seed_waiters_example() {
        let f = seed_fields("Managed a team of 8 waiters", &Vocabulary::builtin());
        assert_eq!(f.verb, "Managed");
        assert_eq!(f.quantifier, "8");
        assert!(f.task.contains("team of"));
        assert!(f.task.contains("waiters"));
        assert!(f.impact.is_empty());
    }

    #[test]
    fn test_seed_splits_at_by() {
        let f = seed_fields("• reduced checkout latency by 40% via caching", &Vocabulary::builtin());
        assert_eq!(f.verb, "Reduced");
        assert_eq!(f.task, "checkout latency");
        assert_eq!(f.impact, "by 40% via caching");
        assert_eq!(f.quantifier, "40%");
    }

    #[test]
    fn test_seed_uses_earlier_marker() {
        let f = seed_fields("Built tooling to cut deploys by half", &Vocabulary::builtin());
        assert_eq!(f.task, "tooling");
        assert_eq!(f.impact, "to cut deploys by half");
    }

    #[test]
    fn test_seed_finds_verb_mid_line() {
        let f = seed_fields("Responsible for payroll, automated 3 reports", &Vocabulary::builtin());
        assert_eq!(f.verb, "Automated");
        assert_eq!(f.task, "Responsible for payroll, 3 reports");
        assert_eq!(f.quantifier, "3");
    }

    #[test]
    fn test_seed_without_verb_keeps_whole_line_as_task() {
        let f = seed_fields("Point of contact for vendors", &Vocabulary::builtin());
        assert_eq!(f.verb, "");
        assert_eq!(f.task, "Point of contact for vendors");
        assert_eq!(f.impact, "");
        assert_eq!(f.quantifier, "");
    }

    #[test]
    fn test_seed_keeps_noise_lines_as_task() {
        let vocab = Vocabulary::builtin();
        assert_eq!(normalize_line("Skills", &vocab), "");

        let f = seed_fields("• Skills", &vocab);
        assert_eq!(f.verb, "");
        assert_eq!(f.task, "Skills");
        assert_eq!(f.impact, "");
        assert_eq!(f.quantifier, "");

        let f = seed_fields("Jan 2019 - Current", &vocab);
        assert_eq!(f.task, "Jan 2019 - Current");
        assert_eq!(f.quantifier, "2019");
    }

    #[test]
    fn test_seed_empty_text() {
        assert_eq!(seed_fields("  ", &Vocabulary::builtin()), BulletFields::default());
    }

    #[test]
    fn test_build_inserts_connector() {
        let b = build_bullet(&fields("cut", "vendor costs", "fund a new hire", ""));
        assert_eq!(b, "• Cut vendor costs to fund a new hire.");
    }

    #[test]
    fn test_build_keeps_existing_connector() {
        let b = build_bullet(&fields("Reduced", "latency", "By 40%", "40%"));
        assert_eq!(b, "• Reduced latency By 40%.");
    }

    #[test]
    fn test_build_appends_missing_quantifier() {
        let b = build_bullet(&fields("Grew", "newsletter signups", "", "25%"));
        assert_eq!(b, "• Grew newsletter signups (25%).");
    }

    #[test]
    fn test_build_keeps_terminal_punctuation() {
        let b = build_bullet(&fields("Won", "regional award!", "", ""));
        assert_eq!(b, "• Won regional award!");
    }

    #[test]
    fn test_build_collapses_whitespace() {
        let b = build_bullet(&fields("  led ", "  two   launches ", "", " "));
        assert_eq!(b, "• Led two launches.");
    }

    #[test]
    fn test_build_all_empty_is_empty() {
        assert_eq!(build_bullet(&BulletFields::default()), "");
    }

    #[test]
    fn test_build_seed_build_is_stable() {
        let vocab = Vocabulary::builtin();
        let cases = [
            fields("Managed", "a team of 8 waiters", "", "8"),
            fields("reduced", "latency", "by 40%", "40%"),
            fields("", "Sales pipeline", "grow revenue", ""),
            fields("Cut", "costs", "", "30%"),
            fields("Launched", "mobile app", "reach 10k users", "10k"),
        ];
        for f in cases {
            let first = build_bullet(&f);
            let second = build_bullet(&seed_fields(&first, &vocab));
            assert_eq!(first, second, "unstable rebuild for {f:?}");
        }
    }
}
