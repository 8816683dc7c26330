//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dictation_api::{ReportSummary, ScoreReport};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs every report plus a summary as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<ScoreReport>,
}

/// Shape of the JSON document
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    /// One entry per answer, in input order
    pub reports: &'a [ScoreReport],
    /// Totals over all answers
    pub summary: ReportSummary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &ScoreReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument {
            reports: &self.reports,
            summary: ReportSummary::from_reports(&self.reports),
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
