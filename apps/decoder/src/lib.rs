//! Text signal decoding for career-support tooling.
//!
//! Deterministic, synchronous functions that turn free-form prose into structured
//! signals: resume bullets are extracted, decomposed into fields, rebuilt and
//! scored; job posts are split into labelled sections and matched against a skill
//! dictionary. Nothing here performs I/O except the explicit table loaders.

pub mod config;
pub mod errors;
pub mod report;
pub mod resume;
pub mod role;
pub mod text;
pub mod vocab;

pub use errors::EngineError;
pub use resume::{analyze_resume, build_bullet, score_bullet, seed_fields, BulletFields, BulletRecord};
pub use role::{decode_role, detect_skills, parse_sections, SkillDictionary};
pub use text::{extract_bullets, normalize_line, normalize_text_line};
pub use vocab::Vocabulary;
