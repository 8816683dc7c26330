//! Word-level Myers diff
//!
//! Linear-space variant of Myers' O(ND) algorithm: find the middle snake of
//! the edit graph, then recurse on both halves. Common prefixes and suffixes
//! are stripped before every bisection.
//!
//! The middle-snake search and the offset-indexed `V` array are adapted from
//! the Myers implementation in the `similar` crate
//! (<https://github.com/mitsuhiko/similar>, Apache-2.0), reworked to operate
//! on word slices and emit `Chunk`s.

use core::ops::{Index, IndexMut, Range};

use crate::types::EditKind;

/// A run of words sharing one edit kind, borrowing from the normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chunk<'a> {
    pub kind: EditKind,
    pub tokens: Vec<&'a str>,
}

impl<'a> Chunk<'a> {
    pub fn new(kind: EditKind, tokens: Vec<&'a str>) -> Self {
        Self { kind, tokens }
    }
}

/// Furthest-reaching x per diagonal, addressable by negative diagonals
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len + 1) / 2 + 1
}

fn common_prefix_len(old: &[&str], old_range: Range<usize>, new: &[&str], new_range: Range<usize>) -> usize {
    old[old_range]
        .iter()
        .zip(new[new_range].iter())
        .take_while(|(a, b)| a == b)
        .count()
}

fn common_suffix_len(old: &[&str], old_range: Range<usize>, new: &[&str], new_range: Range<usize>) -> usize {
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Diff two token sequences into match/delete/insert chunks
pub(crate) fn diff_tokens<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Chunk<'a>> {
    let max_d = max_d(old.len(), new.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut chunks = Vec::new();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut chunks,
    );

    tracing::trace!(
        old_len = old.len(),
        new_len = new.len(),
        chunks = chunks.len(),
        "computed raw word diff"
    );

    chunks
}

fn push_chunk<'a>(chunks: &mut Vec<Chunk<'a>>, kind: EditKind, tokens: &[&'a str]) {
    if tokens.is_empty() {
        return;
    }
    match chunks.last_mut() {
        Some(last) if last.kind == kind => last.tokens.extend_from_slice(tokens),
        _ => chunks.push(Chunk::new(kind, tokens.to_vec())),
    }
}

fn conquer<'a>(
    old: &[&'a str],
    mut old_range: Range<usize>,
    new: &[&'a str],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    chunks: &mut Vec<Chunk<'a>>,
) {
    let prefix = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    if prefix > 0 {
        push_chunk(
            chunks,
            EditKind::Match,
            &old[old_range.start..old_range.start + prefix],
        );
        old_range.start += prefix;
        new_range.start += prefix;
    }

    let suffix = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let suffix_start = old_range.end - suffix;
    old_range.end -= suffix;
    new_range.end -= suffix;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between prefix and suffix
    } else if new_range.is_empty() {
        push_chunk(chunks, EditKind::Delete, &old[old_range]);
    } else if old_range.is_empty() {
        push_chunk(chunks, EditKind::Insert, &new[new_range]);
    } else if let Some((x, y)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        conquer(old, old_range.start..x, new, new_range.start..y, vf, vb, chunks);
        conquer(old, x..old_range.end, new, y..new_range.end, vf, vb, chunks);
    } else {
        push_chunk(chunks, EditKind::Delete, &old[old_range]);
        push_chunk(chunks, EditKind::Insert, &new[new_range]);
    }

    if suffix > 0 {
        push_chunk(
            chunks,
            EditKind::Match,
            &old[suffix_start..suffix_start + suffix],
        );
    }
}

/// Locate a point on an optimal edit path roughly halfway through it.
///
/// Returns absolute `(old, new)` indices at which the problem can be split.
fn find_middle_snake(
    old: &[&str],
    old_range: Range<usize>,
    new: &[&str],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(n, m) as isize;
    for d in 0..d_max {
        // Forward pass
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);

            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward pass
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}
