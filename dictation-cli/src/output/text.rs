//! Plain text output formatter

use super::{render_inline, OutputFormatter};
use anyhow::Result;
use dictation_api::{ReportSummary, ScoreReport};
use std::io::Write;

/// Plain text formatter - one block per answer, word-diff markers inline
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: Vec<ScoreReport>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &ScoreReport) -> Result<()> {
        if !self.reports.is_empty() {
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", report.source)?;
        writeln!(
            self.writer,
            "  {}",
            render_inline(&report.segments, ("[-", "-]"), ("{+", "+}"))
        )?;
        writeln!(
            self.writer,
            "  accuracy: {}%  grade: {}  xp: {}  wer: {:.3}",
            report.accuracy_percent, report.grade, report.xp, report.word_error_rate
        )?;
        writeln!(
            self.writer,
            "  matched: {}  substituted: {}  deleted: {}  inserted: {}",
            report.matches, report.substitutions, report.deletions, report.insertions
        )?;
        writeln!(self.writer, "  {}", report.message)?;

        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.reports.len() > 1 {
            let summary = ReportSummary::from_reports(&self.reports);
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} answers, mean accuracy {:.1}% (min {}%, max {}%), total xp {}",
                summary.answers,
                summary.mean_accuracy,
                summary.min_accuracy,
                summary.max_accuracy,
                summary.total_xp
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
