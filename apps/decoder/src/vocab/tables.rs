//! Builtin tables. Every entry is lowercase; loaders normalise overrides to match.

use crate::role::sections::SectionKey;

/// Resume action verbs, past tense.
pub const ACTION_VERBS: &[&str] = &[
    "accelerated",
    "achieved",
    "acquired",
    "adapted",
    "administered",
    "advised",
    "analyzed",
    "architected",
    "assembled",
    "assessed",
    "audited",
    "automated",
    "boosted",
    "budgeted",
    "built",
    "captured",
    "championed",
    "coached",
    "collaborated",
    "completed",
    "conducted",
    "consolidated",
    "constructed",
    "consulted",
    "coordinated",
    "created",
    "cultivated",
    "cut",
    "debugged",
    "decreased",
    "defined",
    "delivered",
    "deployed",
    "designed",
    "developed",
    "devised",
    "directed",
    "doubled",
    "drafted",
    "drove",
    "eliminated",
    "enabled",
    "engineered",
    "enhanced",
    "established",
    "evaluated",
    "executed",
    "expanded",
    "expedited",
    "facilitated",
    "forecasted",
    "formulated",
    "founded",
    "generated",
    "grew",
    "guided",
    "handled",
    "headed",
    "hired",
    "identified",
    "implemented",
    "improved",
    "increased",
    "influenced",
    "initiated",
    "innovated",
    "inspected",
    "installed",
    "integrated",
    "introduced",
    "launched",
    "led",
    "maintained",
    "managed",
    "maximized",
    "mentored",
    "migrated",
    "minimized",
    "modernized",
    "monitored",
    "negotiated",
    "optimized",
    "orchestrated",
    "organized",
    "oversaw",
    "overhauled",
    "partnered",
    "pioneered",
    "planned",
    "prepared",
    "presented",
    "prioritized",
    "produced",
    "programmed",
    "published",
    "recruited",
    "redesigned",
    "reduced",
    "refactored",
    "resolved",
    "restructured",
    "revamped",
    "saved",
    "scaled",
    "secured",
    "served",
    "shipped",
    "simplified",
    "spearheaded",
    "standardized",
    "streamlined",
    "strengthened",
    "supervised",
    "supported",
    "tested",
    "trained",
    "transformed",
    "tripled",
    "upgraded",
    "won",
    "wrote",
];

/// Resume headings that carry no content of their own.
pub const HEADING_WORDS: &[&str] = &[
    "summary",
    "professional summary",
    "profile",
    "objective",
    "experience",
    "work experience",
    "professional experience",
    "skills",
    "technical skills",
    "education",
    "contact",
    "interests",
    "projects",
    "certifications",
    "languages",
    "references",
];

/// Job-post heading labels, checked in table order against the start of each line.
pub const SECTION_LABELS: &[(SectionKey, &[&str])] = &[
    (
        SectionKey::Purpose,
        &["overview", "summary", "about the role", "mission", "job purpose"],
    ),
    (
        SectionKey::Responsibilities,
        &[
            "responsibilities",
            "what you will do",
            "day to day",
            "key duties",
            "role description",
        ],
    ),
    (
        SectionKey::Qualifications,
        &[
            "qualifications",
            "what you bring",
            "must have",
            "basic qualifications",
            "preferred qualifications",
        ],
    ),
    (
        SectionKey::Requirements,
        &[
            "requirements",
            "skill requirements",
            "requirements & skills",
            "experience",
        ],
    ),
    (
        SectionKey::Skills,
        &["skills", "core skills", "technical skills"],
    ),
];
