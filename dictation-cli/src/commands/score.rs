//! Score command implementation

use super::init_logging;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use dictation_api::text::word_count;
use dictation_api::{score_answer, ScoreReport, ScoringConfig};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Reference transcript file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Answer files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "answer",
        conflicts_with = "answer"
    )]
    pub input: Vec<String>,

    /// Score this answer text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub answer: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Scoring configuration file
    #[arg(short, long, value_name = "FILE", env = "DICTATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Worker threads for scoring files (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block per answer with inline word diff
    Text,
    /// JSON document with every report and a summary
    Json,
    /// Markdown report with a metrics table per answer
    Markdown,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting dictation scoring");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let reference = FileReader::read_text(&self.reference)?;
        if word_count(&reference) == 0 {
            log::warn!(
                "Reference {} contains no words; every answer scores 0%",
                self.reference.display()
            );
        }

        let reports = match &self.answer {
            Some(answer) => vec![score_answer("<answer>", &reference, answer, &config)],
            None => self.score_files(&reference, &config)?,
        };

        let mut formatter = self.create_formatter()?;
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()?;

        log::info!("Scored {} answer(s)", reports.len());
        Ok(())
    }

    fn load_config(&self) -> Result<ScoringConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading scoring configuration from {}", path.display());
                ScoringConfig::from_file(path)
                    .with_context(|| format!("Failed to load configuration: {}", path.display()))
            }
            None => Ok(ScoringConfig::default()),
        }
    }

    fn score_files(&self, reference: &str, config: &ScoringConfig) -> Result<Vec<ScoreReport>> {
        let files = resolve_patterns(&self.input)?;
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        log::info!("Scoring {} file(s) on {} thread(s)", files.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| score_file(path, reference, config, &progress))
                .collect::<Result<Vec<_>>>()
        });

        progress.finish();
        reports
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

fn score_file(
    path: &Path,
    reference: &str,
    config: &ScoringConfig,
    progress: &ProgressReporter,
) -> Result<ScoreReport> {
    let answer = FileReader::read_text(path)?;
    let source = path.display().to_string();
    let report = score_answer(source.as_str(), reference, &answer, config);

    log::debug!(
        "{}: {}% ({}), {} xp",
        source,
        report.accuracy_percent,
        report.grade,
        report.xp
    );
    progress.file_completed(&source);
    Ok(report)
}
