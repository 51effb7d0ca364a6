//! Markdown rendering of decoder output, for callers that export to a document.

use crate::resume::analysis::{BulletRecord, ResumeSummary};
use crate::resume::scoring::score_label;
use crate::role::decode::RoleDecoding;

/// Skills listed in the role table.
const ROLE_SKILL_ROWS: usize = 15;

pub fn resume_markdown(records: &[BulletRecord], summary: &ResumeSummary) -> String {
    let mut out = String::from("# Resume signal report\n\n");

    if records.is_empty() {
        out.push_str("No bullets found. Paste accomplishment lines, one per line.\n");
        return out;
    }

    out.push_str(&format!(
        "{} bullets · average score {:.0} → {:.0} · {} quantified · {} verb-led\n",
        summary.bullet_count,
        summary.average_baseline,
        summary.average_improved,
        summary.quantified,
        summary.verb_led,
    ));

    for (index, record) in records.iter().enumerate() {
        let before = score_label(record.baseline_score());
        let after = score_label(record.improved_score());

        out.push_str(&format!("\n## Bullet {}\n\n", index + 1));
        out.push_str(&format!(
            "- Before ({}, {}): {}\n",
            record.baseline_score(),
            before.label(),
            strip_bullet(record.original())
        ));
        out.push_str(&format!(
            "- After ({}, {}): {}\n",
            record.improved_score(),
            after.label(),
            strip_bullet(record.improved())
        ));

        let fields = record.fields();
        let missing: Vec<&str> = [
            ("verb", &fields.verb),
            ("impact", &fields.impact),
            ("quantifier", &fields.quantifier),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            out.push_str(&format!("- Missing: {}\n", missing.join(", ")));
        }
    }

    out
}

pub fn role_markdown(decoding: &RoleDecoding) -> String {
    let mut out = String::from("# Role decoding\n\n## Sections\n\n");

    for section in &decoding.sections {
        let heading = if section.heading.is_empty() {
            "(untitled)"
        } else {
            section.heading.as_str()
        };
        out.push_str(&format!(
            "- **{}** `{}`: {} lines\n",
            heading,
            section.key.as_str(),
            section.line_count
        ));
    }

    out.push_str("\n## Skills\n\n");
    if decoding.skills.is_empty() {
        out.push_str("No dictionary skills detected.\n");
        return out;
    }

    out.push_str("| Skill | Mentions | Confidence | Matched |\n");
    out.push_str("|---|---|---|---|\n");
    for skill in decoding.top_skills(ROLE_SKILL_ROWS) {
        let mut distinct: Vec<&str> = Vec::new();
        for m in &skill.matches {
            if !distinct.contains(&m.as_str()) {
                distinct.push(m.as_str());
            }
        }
        out.push_str(&format!(
            "| {} | {} | {:.0}% | {} |\n",
            skill.label,
            skill.frequency,
            skill.confidence * 100.0,
            distinct.join(", ")
        ));
    }

    out
}

fn strip_bullet(text: &str) -> &str {
    text.trim_start_matches('•').trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::analysis::analyze_resume;
    use crate::role::decode::decode_role;
    use crate::role::skills::SkillDictionary;
    use crate::vocab::Vocabulary;

    #[test]
    fn test_resume_markdown_lists_each_bullet() {
        let vocab = Vocabulary::builtin();
        let records = analyze_resume(
            "- Managed a team of 8 waiters\n- Responsible for closing duties",
            &vocab,
        );
        let summary = ResumeSummary::from_records(&records, &vocab);
        let md = resume_markdown(&records, &summary);

        assert!(md.starts_with("# Resume signal report"));
        assert!(md.contains("## Bullet 1"));
        assert!(md.contains("## Bullet 2"));
        assert!(md.contains("- Before (75, Moderate): Managed a team of 8 waiters"));
        assert!(md.contains("- Missing: impact\n"));
        assert!(md.contains("- Missing: verb, impact, quantifier"));
    }

    #[test]
    fn test_resume_markdown_empty() {
        let md = resume_markdown(&[], &ResumeSummary::default());
        assert!(md.contains("No bullets found"));
    }

    #[test]
    fn test_role_markdown_table() {
        let dict = SkillDictionary::from_json_str(
            r#"{"python": {"label": "Python", "keywords": ["python", "django"]}}"#,
        )
        .unwrap();
        let decoding = decode_role(
            "Requirements:\nPython and Django\nMore python",
            &dict,
            &Vocabulary::builtin(),
        );
        let md = role_markdown(&decoding);

        assert!(md.contains("- **Requirements** `requirements`: 2 lines"));
        assert!(md.contains("| Python | 3 | 100% | python, django |"));
    }

    #[test]
    fn test_role_markdown_without_skills() {
        let dict = SkillDictionary::from_json_str(r#"{"x": {"keywords": ["zzz"]}}"#).unwrap();
        let decoding = decode_role("Plain text", &dict, &Vocabulary::builtin());
        let md = role_markdown(&decoding);
        assert!(md.contains("**(untitled)** `general`: 1 lines"));
        assert!(md.contains("No dictionary skills detected."));
    }
}
