use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which decoder the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Resume,
    Role,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resume" => Ok(Mode::Resume),
            "role" => Ok(Mode::Role),
            other => Err(anyhow!("unknown mode '{other}' (expected 'resume' or 'role')")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(anyhow!(
                "unknown format '{other}' (expected 'json' or 'markdown')"
            )),
        }
    }
}

/// Binary configuration loaded from environment variables. Every variable is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    /// Read stdin when unset.
    pub input_path: Option<PathBuf>,
    /// Bundled dictionary when unset.
    pub skills_path: Option<PathBuf>,
    /// Builtin vocabulary when unset.
    pub vocabulary_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional_path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Ok(Config {
            mode: lookup("DECODER_MODE")
                .unwrap_or_else(|| "resume".to_string())
                .parse::<Mode>()
                .context("DECODER_MODE must be 'resume' or 'role'")?,
            input_path: optional_path("DECODER_INPUT"),
            skills_path: optional_path("DECODER_SKILLS_PATH"),
            vocabulary_path: optional_path("DECODER_VOCABULARY_PATH"),
            format: lookup("DECODER_FORMAT")
                .unwrap_or_else(|| "json".to_string())
                .parse::<OutputFormat>()
                .context("DECODER_FORMAT must be 'json' or 'markdown'")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
