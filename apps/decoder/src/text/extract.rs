use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize::normalize_text_line;
use crate::vocab::Vocabulary;

/// A line that opens with a bullet marker and has something after it.
static MARKED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-•*]\s*\S").expect("valid regex"));

/// Splits pasted resume text into normalised `• `-prefixed bullets.
///
/// When any line carries a bullet marker only the marked lines are candidates;
/// otherwise every line is. Noise lines are dropped and order is preserved.
pub fn extract_bullets(text: &str, vocab: &Vocabulary) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let marked: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| MARKED_LINE.is_match(line))
        .collect();

    let candidates = if marked.is_empty() { lines } else { marked };

    candidates
        .into_iter()
        .map(|line| normalize_text_line(line, vocab))
        .filter(|line| !line.is_empty())
        .collect()
}
