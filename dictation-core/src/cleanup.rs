//! Cleanup of raw diff output
//!
//! A minimal edit script is not unique, and the raw output of the diff can
//! interleave deletions and insertions or split one match into fragments.
//! This pass rewrites the chunks into their most legible equivalent:
//!
//! 1. adjacent chunks of the same kind are coalesced;
//! 2. each run of edits between two matches becomes one deletion followed by
//!    one insertion;
//! 3. words shared by the start (or end) of such a deletion/insertion pair
//!    are moved into the neighbouring match;
//! 4. a lone edit that ends with the preceding match (or starts with the
//!    following one) is slid over it, so the two matches around it merge.
//!
//! Steps repeat until nothing moves.

use crate::diff::Chunk;
use crate::types::EditKind;

/// Rewrite raw diff chunks into their cleaned-up form
pub(crate) fn cleanup(chunks: Vec<Chunk<'_>>) -> Vec<Chunk<'_>> {
    let mut chunks = merge_runs(chunks);
    while shift_lone_edits(&mut chunks) {
        chunks = merge_runs(chunks);
    }
    chunks
}

fn push_match<'a>(out: &mut Vec<Chunk<'a>>, tokens: Vec<&'a str>) {
    if tokens.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.kind == EditKind::Match => last.tokens.extend(tokens),
        _ => out.push(Chunk::new(EditKind::Match, tokens)),
    }
}

fn shared_prefix(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn shared_suffix(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Emit a pending edit run; returns the words both sides share at its end,
/// which belong to the match that follows.
fn flush_edits<'a>(
    out: &mut Vec<Chunk<'a>>,
    deleted: &mut Vec<&'a str>,
    inserted: &mut Vec<&'a str>,
) -> Vec<&'a str> {
    let prefix = shared_prefix(deleted, inserted);
    if prefix > 0 {
        inserted.drain(..prefix);
        let shared: Vec<&str> = deleted.drain(..prefix).collect();
        push_match(out, shared);
    }

    let suffix = shared_suffix(deleted, inserted);
    inserted.truncate(inserted.len() - suffix);
    let shared = deleted.split_off(deleted.len() - suffix);

    if !deleted.is_empty() {
        out.push(Chunk::new(EditKind::Delete, std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(Chunk::new(EditKind::Insert, std::mem::take(inserted)));
    }

    shared
}

fn merge_runs(chunks: Vec<Chunk<'_>>) -> Vec<Chunk<'_>> {
    let mut out = Vec::with_capacity(chunks.len());
    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    for chunk in chunks {
        match chunk.kind {
            EditKind::Delete => deleted.extend(chunk.tokens),
            EditKind::Insert => inserted.extend(chunk.tokens),
            EditKind::Match => {
                let mut tokens = flush_edits(&mut out, &mut deleted, &mut inserted);
                tokens.extend(chunk.tokens);
                push_match(&mut out, tokens);
            }
        }
    }

    let tail = flush_edits(&mut out, &mut deleted, &mut inserted);
    push_match(&mut out, tail);

    out
}

/// Slide single edits sitting between two matches. Returns whether anything
/// moved.
fn shift_lone_edits(chunks: &mut Vec<Chunk<'_>>) -> bool {
    let mut changed = false;
    let mut i = 1;

    while i + 1 < chunks.len() {
        let is_lone_edit = chunks[i - 1].kind == EditKind::Match
            && chunks[i].kind.is_edit()
            && chunks[i + 1].kind == EditKind::Match;

        if is_lone_edit {
            let before = chunks[i - 1].tokens.clone();
            let after = chunks[i + 1].tokens.clone();
            let edit = &chunks[i].tokens;

            if edit.len() >= before.len() && edit.ends_with(&before) {
                // A<edit>B where edit ends with A: <A + edit head>(A + B)
                let head = &edit[..edit.len() - before.len()];
                let mut shifted = before.clone();
                shifted.extend_from_slice(head);
                chunks[i].tokens = shifted;

                let mut merged = before;
                merged.extend(after);
                chunks[i + 1].tokens = merged;

                chunks.remove(i - 1);
                changed = true;
            } else if edit.len() >= after.len() && edit.starts_with(&after) {
                // A<edit>B where edit starts with B: (A + B)<edit tail + B>
                let mut shifted = edit[after.len()..].to_vec();
                shifted.extend_from_slice(&after);
                chunks[i].tokens = shifted;

                chunks[i - 1].tokens.extend(after);
                chunks.remove(i + 1);
                changed = true;
            }
        }

        i += 1;
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk<'a>(kind: EditKind, text: &'a str) -> Chunk<'a> {
        Chunk::new(kind, text.split(' ').collect())
    }

    fn render(chunks: &[Chunk<'_>]) -> Vec<String> {
        chunks
            .iter()
            .map(|c| {
                let marker = match c.kind {
                    EditKind::Match => '=',
                    EditKind::Delete => '-',
                    EditKind::Insert => '+',
                };
                format!("{marker}{}", c.tokens.join(" "))
            })
            .collect()
    }

    #[test]
    fn test_insert_before_delete_is_reordered() {
        let raw = vec![
            chunk(EditKind::Match, "the quick brown"),
            chunk(EditKind::Insert, "cat"),
            chunk(EditKind::Delete, "fox"),
        ];
        assert_eq!(render(&cleanup(raw)), vec!["=the quick brown", "-fox", "+cat"]);
    }

    #[test]
    fn test_interleaved_edits_are_grouped() {
        let raw = vec![
            chunk(EditKind::Delete, "a"),
            chunk(EditKind::Insert, "x"),
            chunk(EditKind::Delete, "b"),
            chunk(EditKind::Insert, "y"),
            chunk(EditKind::Match, "end"),
        ];
        assert_eq!(render(&cleanup(raw)), vec!["-a b", "+x y", "=end"]);
    }

    #[test]
    fn test_adjacent_matches_coalesce() {
        let raw = vec![chunk(EditKind::Match, "a b"), chunk(EditKind::Match, "c")];
        assert_eq!(render(&cleanup(raw)), vec!["=a b c"]);
    }

    #[test]
    fn test_shared_prefix_and_suffix_move_into_matches() {
        let raw = vec![
            chunk(EditKind::Match, "start"),
            chunk(EditKind::Delete, "one two three"),
            chunk(EditKind::Insert, "one four three"),
            chunk(EditKind::Match, "end"),
        ];
        assert_eq!(
            render(&cleanup(raw)),
            vec!["=start one", "-two", "+four", "=three end"]
        );
    }

    #[test]
    fn test_lone_edit_slides_left_over_match() {
        // a<+b a>c  ->  <+a b>a c
        let raw = vec![
            chunk(EditKind::Match, "a"),
            chunk(EditKind::Insert, "b a"),
            chunk(EditKind::Match, "c"),
        ];
        assert_eq!(render(&cleanup(raw)), vec!["+a b", "=a c"]);
    }

    #[test]
    fn test_lone_edit_slides_right_over_match() {
        // a<-c b>c  ->  a c<-b c>
        let raw = vec![
            chunk(EditKind::Match, "a"),
            chunk(EditKind::Delete, "c b"),
            chunk(EditKind::Match, "c"),
        ];
        assert_eq!(render(&cleanup(raw)), vec!["=a c", "-b c"]);
    }

    #[test]
    fn test_cleanup_keeps_word_totals() {
        let raw = vec![
            chunk(EditKind::Insert, "x"),
            chunk(EditKind::Match, "a"),
            chunk(EditKind::Delete, "b a"),
            chunk(EditKind::Match, "c"),
            chunk(EditKind::Insert, "d"),
            chunk(EditKind::Delete, "e"),
        ];
        let cleaned = cleanup(raw);
        let count = |kind: EditKind| -> usize {
            cleaned
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.tokens.len())
                .sum()
        };
        assert_eq!(count(EditKind::Match), 2);
        assert_eq!(count(EditKind::Delete), 3);
        assert_eq!(count(EditKind::Insert), 2);
    }
}
