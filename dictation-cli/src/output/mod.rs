//! Report formatting module

use anyhow::Result;
use dictation_api::{DisplaySegment, ScoreReport, SegmentKind};

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one scored answer
    fn format_report(&mut self, report: &ScoreReport) -> Result<()>;

    /// Finalize output (e.g., write the summary)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render segments on one line, wrapping deletions and insertions in the
/// given markers
pub(crate) fn render_inline(
    segments: &[DisplaySegment],
    deletion: (&str, &str),
    insertion: (&str, &str),
) -> String {
    let mut line = String::new();

    for segment in segments {
        let text = segment.text.trim_start();
        if segment.text.len() != text.len() {
            line.push(' ');
        }

        let (open, close) = match segment.kind {
            SegmentKind::Match => ("", ""),
            SegmentKind::Deletion => deletion,
            SegmentKind::Insertion => insertion,
        };
        line.push_str(open);
        line.push_str(text);
        line.push_str(close);
    }

    line
}
