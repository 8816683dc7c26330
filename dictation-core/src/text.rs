//! Text normalization and word tokenization
//!
//! Both the reference transcript and the learner's answer go through the same
//! normalization before they are compared, so that differences in letter case
//! or spacing never show up as errors.

/// Normalize text for comparison.
///
/// Lowercases, trims, and collapses every run of whitespace into a single
/// ASCII space. The function is idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for word in lowered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

/// Split text into whitespace-delimited words.
///
/// Scripts without spaces between words come back as a single token per run.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count whitespace-delimited words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
