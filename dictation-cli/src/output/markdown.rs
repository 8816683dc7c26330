//! Markdown output formatter

use super::{render_inline, OutputFormatter};
use anyhow::Result;
use dictation_api::{ReportSummary, ScoreReport};
use std::io::Write;

/// Markdown formatter - one section per answer with a metrics table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    reports: Vec<ScoreReport>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &ScoreReport) -> Result<()> {
        if self.reports.is_empty() {
            writeln!(self.writer, "# Dictation Report")?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "## {}", report.source)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            render_inline(&report.segments, ("~~", "~~"), ("**", "**"))
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Accuracy | {}% |", report.accuracy_percent)?;
        writeln!(self.writer, "| Grade | {} |", report.grade)?;
        writeln!(self.writer, "| XP | {} |", report.xp)?;
        writeln!(self.writer, "| WER | {:.3} |", report.word_error_rate)?;
        writeln!(self.writer, "| Matched | {} |", report.matches)?;
        writeln!(self.writer, "| Substituted | {} |", report.substitutions)?;
        writeln!(self.writer, "| Deleted | {} |", report.deletions)?;
        writeln!(self.writer, "| Inserted | {} |", report.insertions)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.message)?;

        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let summary = ReportSummary::from_reports(&self.reports);
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Answers: {}, mean accuracy: {:.1}%, total XP: {}*",
            summary.answers, summary.mean_accuracy, summary.total_xp
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
