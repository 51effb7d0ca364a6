// Role path: job-post text → labelled sections → dictionary skill detection.

pub mod decode;
pub mod sections;
pub mod skills;

pub use decode::{decode_role, RoleDecoding, SectionSummary};
pub use sections::{parse_sections, ParsedJobPost, ParsedSection, SectionKey};
pub use skills::{detect_skills, DetectedSkill, SkillDictionary, SkillDictionaryEntry};
