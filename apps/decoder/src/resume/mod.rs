// Resume path: extracted bullets → seeded fields → rebuilt bullet → scores.
// No I/O; callers own persistence of records and sessions.

pub mod analysis;
pub mod fields;
pub mod scoring;
pub mod session;

pub use analysis::{analyze_resume, BulletRecord, ResumeSummary};
pub use fields::{build_bullet, seed_fields, BulletFields};
pub use scoring::{
    analyze_signals, edit_bonus, field_bonus, improved_score, score_bullet, score_label,
    ImprovedScore, SignalBreakdown, SignalTier,
};
pub use session::ResumeSession;
