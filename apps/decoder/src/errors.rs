use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the external tables the engine consumes.
///
/// The decoding functions themselves never fail: malformed or empty text degrades
/// to empty fields, zero scores and a single `general` section. Only the loaders
/// for vocabulary and skill dictionaries return this type.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}
