//! Role decoding — section parsing followed by skill detection over the parsed text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::role::sections::{parse_sections, ParsedJobPost, SectionKey};
use crate::role::skills::{detect_skills, DetectedSkill, SkillDictionary};
use crate::vocab::Vocabulary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub key: SectionKey,
    pub heading: String,
    pub line_count: usize,
    /// Keys of skills detected within this section alone, ranked like `skills`.
    pub skill_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDecoding {
    pub post: ParsedJobPost,
    pub skills: Vec<DetectedSkill>,
    pub sections: Vec<SectionSummary>,
}

impl RoleDecoding {
    /// The `n` strongest detections (fewer when fewer were found).
    pub fn top_skills(&self, n: usize) -> &[DetectedSkill] {
        &self.skills[..n.min(self.skills.len())]
    }
}

/// Parses `text` into sections, then matches the dictionary against the
/// concatenated section body lines. Heading lines are not matched.
pub fn decode_role(text: &str, dictionary: &SkillDictionary, vocab: &Vocabulary) -> RoleDecoding {
    let post = parse_sections(text, vocab);

    let section_texts: Vec<String> = post.sections.iter().map(|s| s.text()).collect();
    let skills = detect_skills(&section_texts.join("\n"), dictionary);

    let sections = post
        .sections
        .iter()
        .zip(&section_texts)
        .map(|(section, body)| SectionSummary {
            key: section.key,
            heading: section.heading.clone(),
            line_count: section.lines.len(),
            skill_keys: detect_skills(body, dictionary)
                .into_iter()
                .map(|s| s.key)
                .collect(),
        })
        .collect();

    debug!(
        sections = post.sections.len(),
        skills = skills.len(),
        "decoded role text"
    );

    RoleDecoding {
        post,
        skills,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::skills::SkillDictionaryEntry;

    const POST: &str = "\
Barista — Dockside Coffee
Overview:
Pull espresso shots for the morning rush.
Responsibilities
- Dial in espresso daily
- Keep the POS tidy and balanced
Skills:
Latte art, POS";

    fn dictionary() -> SkillDictionary {
        let entries = [
            ("espresso", "Espresso", vec!["espresso", "latte art", "milk steaming"]),
            ("pos", "Point of Sale", vec!["pos", "cash handling"]),
            ("baking", "Baking", vec!["pastry", "bake"]),
        ];
        SkillDictionary::from_entries(entries.into_iter().map(|(key, label, kws)| {
            (
                key.to_string(),
                SkillDictionaryEntry {
                    id: String::new(),
                    label: label.to_string(),
                    keywords: kws.into_iter().map(String::from).collect(),
                },
            )
        }))
    }

    #[test]
    fn test_decode_ranks_skills_across_sections() {
        let decoded = decode_role(POST, &dictionary(), &Vocabulary::builtin());
        let keys: Vec<&str> = decoded.skills.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["espresso", "pos"]);
        // "espresso" twice plus "latte art"; "pos" once in duties, once in skills
        assert_eq!(decoded.skills[0].frequency, 3);
        assert_eq!(decoded.skills[1].frequency, 2);
    }

    #[test]
    fn test_section_summaries_follow_sections() {
        let decoded = decode_role(POST, &dictionary(), &Vocabulary::builtin());
        let summary: Vec<(SectionKey, usize)> = decoded
            .sections
            .iter()
            .map(|s| (s.key, s.line_count))
            .collect();
        assert_eq!(
            summary,
            vec![
                (SectionKey::General, 1),
                (SectionKey::Purpose, 1),
                (SectionKey::Responsibilities, 2),
                (SectionKey::Skills, 1),
            ]
        );
        // equal frequency inside the section; pos has the higher confidence
        assert_eq!(decoded.sections[2].skill_keys, vec!["pos", "espresso"]);
    }

    #[test]
    fn test_top_skills_is_bounded() {
        let decoded = decode_role(POST, &dictionary(), &Vocabulary::builtin());
        assert_eq!(decoded.top_skills(1)[0].key, "espresso");
        assert_eq!(decoded.top_skills(10).len(), 2);
        assert!(decoded.top_skills(0).is_empty());
    }

    #[test]
    fn test_heading_text_is_not_matched() {
        let decoded = decode_role(
            "Experience with espresso:\nWarm smile",
            &dictionary(),
            &Vocabulary::builtin(),
        );
        assert_eq!(decoded.post.sections[0].key, SectionKey::Requirements);
        assert_eq!(decoded.post.sections[0].heading, "Experience With Espresso");
        assert!(decoded.skills.is_empty());
    }

    #[test]
    fn test_plain_text_without_skills() {
        let decoded = decode_role("Friendly team\nFlexible hours", &dictionary(), &Vocabulary::builtin());
        assert_eq!(decoded.post.sections.len(), 1);
        assert_eq!(decoded.sections[0].line_count, 2);
        assert!(decoded.skills.is_empty());
        assert!(decoded.sections[0].skill_keys.is_empty());
    }
}
