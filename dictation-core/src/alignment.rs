//! Alignment of a learner's answer against the reference transcript

use crate::cleanup::cleanup;
use crate::diff::diff_tokens;
use crate::text::{normalize, tokenize};
use crate::types::{DisplaySegment, EditKind, EditOperation};

/// Result of aligning an answer with its reference
///
/// Holds the cleaned edit operations in reading order together with the
/// word-level counters derived from them. Every reference word lands in
/// exactly one of `matches`, `deletions` or `substitutions`; every answer
/// word in exactly one of `matches`, `insertions` or `substitutions`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignmentResult {
    operations: Vec<EditOperation>,
    matches: usize,
    deletions: usize,
    insertions: usize,
    substitutions: usize,
}

impl AlignmentResult {
    /// Build a result from cleaned operations, classifying substitutions.
    ///
    /// A deletion immediately followed by an insertion is one substitution
    /// event regardless of how similar the two spans are. The shorter side
    /// is paired word for word; leftover words count as plain deletions or
    /// insertions.
    pub(crate) fn from_operations(operations: Vec<EditOperation>) -> Self {
        let mut matches = 0;
        let mut deletions = 0;
        let mut insertions = 0;
        let mut substitutions = 0;

        let mut i = 0;
        while i < operations.len() {
            let words = operations[i].word_count();

            match operations[i].kind() {
                EditKind::Match => matches += words,
                EditKind::Delete => match operations.get(i + 1) {
                    Some(next) if next.kind() == EditKind::Insert => {
                        let inserted = next.word_count();
                        substitutions += words.min(inserted);
                        deletions += words.saturating_sub(inserted);
                        insertions += inserted.saturating_sub(words);
                        // The insertion is consumed by this substitution.
                        i += 1;
                    }
                    _ => deletions += words,
                },
                EditKind::Insert => insertions += words,
            }

            i += 1;
        }

        Self {
            operations,
            matches,
            deletions,
            insertions,
            substitutions,
        }
    }

    /// Edit operations in reading order
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Words transcribed correctly
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Reference words the learner left out
    pub fn deletions(&self) -> usize {
        self.deletions
    }

    /// Extra words the learner added
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// Reference words replaced by a different word
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// Substitutions, deletions and insertions together
    pub fn error_count(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Whether the answer matched the reference word for word
    pub fn is_exact(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of normalized reference words covered by the operations
    pub fn reference_word_count(&self) -> usize {
        self.side_word_count(EditKind::Insert)
    }

    /// Number of normalized answer words covered by the operations
    pub fn user_word_count(&self) -> usize {
        self.side_word_count(EditKind::Delete)
    }

    fn side_word_count(&self, other_side: EditKind) -> usize {
        self.operations
            .iter()
            .filter(|op| op.kind() != other_side)
            .map(EditOperation::word_count)
            .sum()
    }

    /// Project the operations into renderable segments.
    ///
    /// Segments map one to one onto operations. Concatenating their texts
    /// gives a single readable line.
    pub fn segments(&self) -> Vec<DisplaySegment> {
        self.operations
            .iter()
            .enumerate()
            .map(|(i, op)| {
                let text = if i == 0 {
                    op.text()
                } else {
                    format!(" {}", op.text())
                };
                DisplaySegment {
                    text,
                    kind: op.kind().into(),
                }
            })
            .collect()
    }
}

/// Align a learner's answer with the reference transcript.
///
/// Both inputs are normalized, split into words and diffed with a minimal
/// edit script that is then cleaned up. Never fails: empty or blank inputs
/// produce an empty or one-sided result.
pub fn align(reference: &str, user_input: &str) -> AlignmentResult {
    let reference = normalize(reference);
    let user_input = normalize(user_input);
    let reference_tokens = tokenize(&reference);
    let user_tokens = tokenize(&user_input);

    let operations = cleanup(diff_tokens(&reference_tokens, &user_tokens))
        .into_iter()
        .map(|chunk| {
            EditOperation::new(
                chunk.kind,
                chunk.tokens.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

    let result = AlignmentResult::from_operations(operations);

    tracing::debug!(
        reference_words = reference_tokens.len(),
        user_words = user_tokens.len(),
        matches = result.matches,
        deletions = result.deletions,
        insertions = result.insertions,
        substitutions = result.substitutions,
        "aligned answer with reference"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentKind;

    fn op(kind: EditKind, text: &str) -> EditOperation {
        EditOperation::new(kind, text.split(' ').map(str::to_string).collect())
    }

    #[test]
    fn test_substitution_accounting() {
        let result = align("the quick brown fox", "the quick brown cat");
        assert_eq!(result.matches(), 3);
        assert_eq!(result.substitutions(), 1);
        assert_eq!(result.deletions(), 0);
        assert_eq!(result.insertions(), 0);
        assert_eq!(
            result.operations(),
            &[
                op(EditKind::Match, "the quick brown"),
                op(EditKind::Delete, "fox"),
                op(EditKind::Insert, "cat"),
            ]
        );
    }

    #[test]
    fn test_pure_deletion() {
        let result = align("one two three", "one three");
        assert_eq!(result.matches(), 2);
        assert_eq!(result.deletions(), 1);
        assert_eq!(result.substitutions(), 0);
        assert_eq!(result.insertions(), 0);
        assert_eq!(result.operations()[1], op(EditKind::Delete, "two"));
    }

    #[test]
    fn test_pure_insertion() {
        let result = align("hello world", "hello world extra");
        assert_eq!(result.matches(), 2);
        assert_eq!(result.insertions(), 1);
        assert_eq!(result.deletions(), 0);
        assert_eq!(result.substitutions(), 0);
    }

    #[test]
    fn test_identity_ignores_case_and_spacing() {
        let result = align("The Quick  brown\tfox", "  the quick BROWN fox ");
        assert!(result.is_exact());
        assert_eq!(result.matches(), 4);
        assert!(result
            .operations()
            .iter()
            .all(|op| op.kind() == EditKind::Match));
    }

    #[test]
    fn test_empty_inputs() {
        let result = align("", "");
        assert!(result.operations().is_empty());
        assert_eq!(result.error_count(), 0);

        let result = align("   ", "some words");
        assert_eq!(result.insertions(), 2);
        assert_eq!(result.reference_word_count(), 0);

        let result = align("some words", "");
        assert_eq!(result.deletions(), 2);
        assert_eq!(result.user_word_count(), 0);
    }

    #[test]
    fn test_longer_replacement_splits_into_substitution_and_insertion() {
        let ops = vec![
            op(EditKind::Match, "i"),
            op(EditKind::Delete, "cannot"),
            op(EditKind::Insert, "can not really"),
        ];
        let result = AlignmentResult::from_operations(ops);
        assert_eq!(result.substitutions(), 1);
        assert_eq!(result.insertions(), 2);
        assert_eq!(result.deletions(), 0);
    }

    #[test]
    fn test_shorter_replacement_splits_into_substitution_and_deletion() {
        let ops = vec![
            op(EditKind::Delete, "new york city"),
            op(EditKind::Insert, "newark"),
            op(EditKind::Match, "is big"),
        ];
        let result = AlignmentResult::from_operations(ops);
        assert_eq!(result.substitutions(), 1);
        assert_eq!(result.deletions(), 2);
        assert_eq!(result.insertions(), 0);
        assert_eq!(result.matches(), 2);
    }

    #[test]
    fn test_insert_not_preceded_by_delete_is_insertion() {
        let ops = vec![
            op(EditKind::Insert, "uh"),
            op(EditKind::Match, "hello"),
            op(EditKind::Delete, "there"),
        ];
        let result = AlignmentResult::from_operations(ops);
        assert_eq!(result.insertions(), 1);
        assert_eq!(result.deletions(), 1);
        assert_eq!(result.substitutions(), 0);
    }

    #[test]
    fn test_dissimilar_words_still_substitute() {
        let result = align("the cat", "xyz cat");
        assert_eq!(result.substitutions(), 1);
        assert_eq!(result.matches(), 1);
    }

    #[test]
    fn test_counters_reconcile_with_word_counts() {
        let reference = "she sells sea shells by the sea shore";
        let answer = "she sell the sea shells on the shore today";
        let result = align(reference, answer);

        assert_eq!(
            result.matches() + result.deletions() + result.substitutions(),
            8
        );
        assert_eq!(
            result.matches() + result.insertions() + result.substitutions(),
            9
        );
        assert_eq!(result.reference_word_count(), 8);
        assert_eq!(result.user_word_count(), 9);
    }

    #[test]
    fn test_segments() {
        let result = align("the quick brown fox", "the quick brown cat");
        let segments = result.segments();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "the quick brown");
        assert_eq!(segments[0].kind, SegmentKind::Match);
        assert_eq!(segments[1].text, " fox");
        assert_eq!(segments[1].kind, SegmentKind::Deletion);
        assert_eq!(segments[2].text, " cat");
        assert_eq!(segments[2].kind, SegmentKind::Insertion);

        let line: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(line, "the quick brown fox cat");
    }
}
