//! Value types produced by the aligner

use core::fmt;

/// Kind of a single edit operation
///
/// Deletions and insertions are named from the reference's point of view:
/// a deletion is reference text the learner left out, an insertion is text
/// the learner typed that the reference does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EditKind {
    /// Text common to both sides
    Match,
    /// Text present only in the reference
    Delete,
    /// Text present only in the learner's answer
    Insert,
}

impl EditKind {
    /// Whether this kind counts against the learner
    pub fn is_edit(&self) -> bool {
        !matches!(self, EditKind::Match)
    }
}

/// One maximal run of words sharing an edit kind
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditOperation {
    kind: EditKind,
    tokens: Vec<String>,
}

impl EditOperation {
    pub(crate) fn new(kind: EditKind, tokens: Vec<String>) -> Self {
        Self { kind, tokens }
    }

    /// Kind of this operation
    pub fn kind(&self) -> EditKind {
        self.kind
    }

    /// Words covered by this operation, in reading order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Words joined with the single-space separator of normalized text
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Number of words covered by this operation
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            EditKind::Match => ' ',
            EditKind::Delete => '-',
            EditKind::Insert => '+',
        };
        write!(f, "{marker}{}", self.text())
    }
}

/// Highlighting category of a display segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SegmentKind {
    /// Correctly transcribed text
    Match,
    /// Reference text the learner missed
    Deletion,
    /// Text the learner added
    Insertion,
}

impl SegmentKind {
    /// Lowercase name used by renderers
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Match => "match",
            SegmentKind::Deletion => "deletion",
            SegmentKind::Insertion => "insertion",
        }
    }
}

impl From<EditKind> for SegmentKind {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Match => SegmentKind::Match,
            EditKind::Delete => SegmentKind::Deletion,
            EditKind::Insert => SegmentKind::Insertion,
        }
    }
}

/// Renderable piece of an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplaySegment {
    /// Segment text, with a leading space on every segment but the first
    pub text: String,
    /// Highlighting category
    pub kind: SegmentKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_operation_text_and_count() {
        let op = EditOperation::new(
            EditKind::Match,
            vec!["the".to_string(), "quick".to_string()],
        );
        assert_eq!(op.text(), "the quick");
        assert_eq!(op.word_count(), 2);
        assert_eq!(op.to_string(), " the quick");
    }

    #[test]
    fn test_edit_operation_display_markers() {
        let deleted = EditOperation::new(EditKind::Delete, vec!["fox".to_string()]);
        let inserted = EditOperation::new(EditKind::Insert, vec!["cat".to_string()]);
        assert_eq!(deleted.to_string(), "-fox");
        assert_eq!(inserted.to_string(), "+cat");
    }

    #[test]
    fn test_segment_kind_from_edit_kind() {
        assert_eq!(SegmentKind::from(EditKind::Match), SegmentKind::Match);
        assert_eq!(SegmentKind::from(EditKind::Delete), SegmentKind::Deletion);
        assert_eq!(SegmentKind::from(EditKind::Insert), SegmentKind::Insertion);
        assert_eq!(SegmentKind::Deletion.as_str(), "deletion");
    }

    #[test]
    fn test_is_edit() {
        assert!(!EditKind::Match.is_edit());
        assert!(EditKind::Delete.is_edit());
        assert!(EditKind::Insert.is_edit());
    }
}
