//! Token-level signal detection: action verbs, numeric proof, outcome connectors.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::Vocabulary;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").expect("valid regex"));

/// Currency amounts, percentages and plain counts.
static NUMERIC_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$€£]\s?\d|\d+(?:[.,]\d+)*\s?%|\d").expect("valid regex")
});

static QUANTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?%?").expect("valid regex"));

static OUTCOME_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:by|to|resulting in|result in|leading to)\b").expect("valid regex")
});

static BY_OR_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:by|to)\b").expect("valid regex"));

/// A vocabulary verb located inside a line.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbMatch {
    pub word: String,
    pub span: Range<usize>,
}

/// The verb that opens the line, if its first word is in the vocabulary.
pub fn leading_verb(text: &str, vocab: &Vocabulary) -> Option<VerbMatch> {
    WORD.find(text)
        .filter(|m| m.start() == 0 && vocab.is_action_verb(m.as_str()))
        .map(|m| VerbMatch {
            word: m.as_str().to_string(),
            span: m.range(),
        })
}

/// The left-most vocabulary verb anywhere in the line.
pub fn first_verb(text: &str, vocab: &Vocabulary) -> Option<VerbMatch> {
    WORD.find_iter(text)
        .find(|m| vocab.is_action_verb(m.as_str()))
        .map(|m| VerbMatch {
            word: m.as_str().to_string(),
            span: m.range(),
        })
}

pub fn has_verb(text: &str, vocab: &Vocabulary) -> bool {
    first_verb(text, vocab).is_some()
}

pub fn has_numeric_signal(text: &str) -> bool {
    NUMERIC_SIGNAL.is_match(text)
}

pub fn has_outcome_connector(text: &str) -> bool {
    OUTCOME_CONNECTOR.is_match(text)
}

/// Narrower than `has_outcome_connector`: only the bare words "by" and "to".
pub fn has_by_or_to(text: &str) -> bool {
    BY_OR_TO.is_match(text)
}

/// First number in the text, with a trailing `%` when present.
pub fn first_quantifier(text: &str) -> Option<&str> {
    QUANTIFIER.find(text).map(|m| m.as_str())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Upper-cases the first character, leaving the rest as written.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_verb_requires_first_position() {
        let vocab = Vocabulary::builtin();
        let m = leading_verb("managed a team", &vocab).unwrap();
        assert_eq!(m.word, "managed");
        assert_eq!(m.span, 0..7);
        assert!(leading_verb("Team managed", &vocab).is_none());
    }

    #[test]
    fn test_leading_verb_is_whole_word() {
        let vocab = Vocabulary::builtin();
        assert!(leading_verb("Ledger reconciliation", &vocab).is_none());
    }

    #[test]
    fn test_first_verb_finds_leftmost() {
        let vocab = Vocabulary::builtin();
        let m = first_verb("Responsible for hiring; trained and mentored staff", &vocab).unwrap();
        assert_eq!(m.word, "trained");
    }

    #[test]
    fn test_numeric_signal_variants() {
        assert!(has_numeric_signal("saved $2m"));
        assert!(has_numeric_signal("cut costs 15 %"));
        assert!(has_numeric_signal("team of 8"));
        assert!(!has_numeric_signal("team of eight"));
    }

    #[test]
    fn test_outcome_connector_is_whole_word() {
        assert!(has_outcome_connector("reduced cost by half"));
        assert!(has_outcome_connector("Leading to faster releases"));
        assert!(!has_outcome_connector("automated tomato sorting"));
        assert!(!has_outcome_connector("standby rotation"));
    }

    #[test]
    fn test_by_or_to_ignores_longer_connectors() {
        assert!(has_by_or_to("grew sales by 10%"));
        assert!(!has_by_or_to("resulting in fewer outages"));
        assert!(has_outcome_connector("resulting in fewer outages"));
    }

    #[test]
    fn test_first_quantifier_keeps_percent() {
        assert_eq!(first_quantifier("grew revenue 12.5% in 2 quarters"), Some("12.5%"));
        assert_eq!(first_quantifier("team of 8 waiters"), Some("8"));
        assert_eq!(first_quantifier("no numbers"), None);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("managed"), "Managed");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclairé"), "Éclairé");
    }
}
