use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use signal_decoder::config::{Config, Mode, OutputFormat};
use signal_decoder::report::{resume_markdown, role_markdown};
use signal_decoder::resume::{analyze_resume, BulletRecord, ResumeSummary};
use signal_decoder::role::{decode_role, SkillDictionary};
use signal_decoder::Vocabulary;

/// Dictionary used when DECODER_SKILLS_PATH is not set.
const BUNDLED_SKILLS: &str = include_str!("../data/skills.json");

/// Decode resume bullets or a job post into structured signals.
///
/// Mode, format and table paths come from DECODER_* environment variables.
#[derive(Debug, Parser)]
#[command(name = "decoder", version, about)]
struct Cli {
    /// Input text file; overrides DECODER_INPUT. Reads stdin when neither is set.
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct ResumeOutput<'a> {
    summary: &'a ResumeSummary,
    records: &'a [BulletRecord],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(path) = cli.input {
        config.input_path = Some(path);
    }

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "signal_decoder={level},decoder={level}",
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting decoder v{} ({:?} mode)", env!("CARGO_PKG_VERSION"), config.mode);

    let vocab = match &config.vocabulary_path {
        Some(path) => Vocabulary::from_path(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::builtin(),
    };

    let text = read_input(&config)?;
    if text.trim().is_empty() {
        warn!("Input is empty; output will be empty");
    }

    let output = match config.mode {
        Mode::Resume => {
            let records = analyze_resume(&text, &vocab);
            let summary = ResumeSummary::from_records(&records, &vocab);
            info!("Analyzed {} bullets", records.len());
            match config.format {
                OutputFormat::Json => serde_json::to_string_pretty(&ResumeOutput {
                    summary: &summary,
                    records: &records,
                })?,
                OutputFormat::Markdown => resume_markdown(&records, &summary),
            }
        }
        Mode::Role => {
            let dictionary = load_dictionary(&config)?;
            let decoding = decode_role(&text, &dictionary, &vocab);
            info!(
                "Decoded {} sections, {} skills",
                decoding.sections.len(),
                decoding.skills.len()
            );
            match config.format {
                OutputFormat::Json => serde_json::to_string_pretty(&decoding)?,
                OutputFormat::Markdown => role_markdown(&decoding),
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn read_input(config: &Config) -> Result<String> {
    match &config.input_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

fn load_dictionary(config: &Config) -> Result<SkillDictionary> {
    match &config.skills_path {
        Some(path) => SkillDictionary::from_path(path)
            .with_context(|| format!("Failed to load skill dictionary from {}", path.display())),
        None => SkillDictionary::from_json_str(BUNDLED_SKILLS)
            .context("Bundled skill dictionary is malformed"),
    }
}
